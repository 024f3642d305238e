use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolverError;

/// Fatal errors: the run stops and no report is produced.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV serialization failed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Resolver(#[from] ResolverError),
}

impl RunError {
    pub(crate) fn read_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteReport {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}
