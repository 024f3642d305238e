//! `email,status,motivo` CSV report and run summary.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::RunError;
use crate::record::ResultRecord;

pub const HEADER: [&str; 3] = ["email", "status", "motivo"];

/// Writes the header and one row per record, CRLF-terminated, fields quoted
/// only when needed.
pub fn write_report<W: Write>(writer: W, records: &[ResultRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.email.as_str(),
            record.status.label(),
            record.reason.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serializes the report and replaces `path` in one rename, so an
/// interrupted write never leaves a truncated report behind.
pub fn write_report_file(path: impl AsRef<Path>, records: &[ResultRecord]) -> Result<(), RunError> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    write_report(&mut buf, records).map_err(RunError::csv)?;
    replace_file(path, |f| f.write_all(&buf)).map_err(|err| RunError::write_report(path, err))
}

/// Writes `<path>.tmp` through `fill`, syncs it and renames it over `path`.
/// On any failure the temporary file is removed and `path` is untouched.
fn replace_file<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp = tmp_path(path);
    let result = File::create(&tmp).and_then(|mut f| {
        fill(&mut f)?;
        f.sync_all()?;
        drop(f);
        fs::rename(&tmp, path)
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let valid = records.iter().filter(|r| r.is_valid()).count();
        Self {
            total: records.len(),
            valid,
            invalid: records.len() - valid,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {} | valid: {} | invalid: {}",
            self.total, self.valid, self.invalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[ResultRecord]) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_are_quoted_when_needed() {
        let records = vec![
            ResultRecord::valid("a@b.com", "mx.b.com"),
            ResultRecord::invalid("not-an-email", "invalid syntax: missing '@'"),
            ResultRecord::valid("c@d.com", "mx1.d.com, mx2.d.com"),
            ResultRecord::invalid("quote\"d@x.com", "domain not found"),
        ];

        let text = render(&records).replace("\r\n", "\n");
        insta::assert_snapshot!(text.trim_end(), @r#"
        email,status,motivo
        a@b.com,Válido,mx.b.com
        not-an-email,Inválido,invalid syntax: missing '@'
        c@d.com,Válido,"mx1.d.com, mx2.d.com"
        "quote""d@x.com",Inválido,domain not found
        "#);
    }

    #[test]
    fn lines_end_with_crlf() {
        let text = render(&[ResultRecord::valid("a@b.com", "mx.b.com")]);
        assert_eq!(text, "email,status,motivo\r\na@b.com,Válido,mx.b.com\r\n");
    }

    #[test]
    fn empty_report_has_only_header() {
        assert_eq!(render(&[]), "email,status,motivo\r\n");
    }

    #[test]
    fn file_is_replaced_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "stale").unwrap();

        write_report_file(&path, &[ResultRecord::invalid("x", "missing '@'")]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("email,status,motivo\r\n"));
        assert!(written.contains("x,Inválido,missing '@'"));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.csv");
        let err = write_report_file(&path, &[]).unwrap_err();
        assert!(matches!(err, RunError::WriteReport { .. }));
    }

    #[test]
    fn failed_write_removes_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "previous").unwrap();

        let err = replace_file(&path, |f| {
            f.write_all(b"email,status")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!tmp_path(&path).exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn summary_counts() {
        let records = vec![
            ResultRecord::valid("a@b.com", "mx.b.com"),
            ResultRecord::invalid("x", "missing '@'"),
            ResultRecord::valid("a@b.com", "mx.b.com"),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(
            summary,
            Summary {
                total: 3,
                valid: 2,
                invalid: 1
            }
        );
        assert_eq!(summary.to_string(), "total: 3 | valid: 2 | invalid: 1");
    }
}
