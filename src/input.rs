//! Line-oriented address source.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::RunError;

/// Reads the addresses of a UTF-8 text file, see [`parse_addresses`].
pub fn read_addresses(path: impl AsRef<Path>) -> Result<Vec<String>, RunError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| RunError::read_input(path, err))?;
    parse_addresses(BufReader::new(file)).map_err(|err| RunError::read_input(path, err))
}

/// One address per line, trimmed; blank lines and `#` comments are skipped.
pub fn parse_addresses<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        addresses.push(trimmed.to_string());
    }
    Ok(addresses)
}
