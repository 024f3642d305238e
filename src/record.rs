use std::fmt;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Valid,
    Invalid,
}

impl Status {
    /// Label written in the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "Válido",
            Self::Invalid => "Inválido",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One report row; exactly one per input address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub email: String,
    pub status: Status,
    pub reason: String,
}

impl ResultRecord {
    pub fn valid(email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: Status::Valid,
            reason: reason.into(),
        }
    }

    pub fn invalid(email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: Status::Invalid,
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }
}
