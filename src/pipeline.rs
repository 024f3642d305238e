//! Whole run: read addresses, check them, write the report.

use std::path::Path;

use tracing::info;

use crate::dispatch::{DispatchOptions, Dispatcher};
use crate::error::RunError;
use crate::input::read_addresses;
use crate::report::{Summary, write_report_file};
use crate::resolver::DomainResolver;

/// Only file-level failures abort the run; per-address problems end up
/// as `Inválido` rows.
pub fn run<R: DomainResolver>(
    input: &Path,
    output: &Path,
    resolver: R,
    options: DispatchOptions,
) -> Result<Summary, RunError> {
    let addresses = read_addresses(input)?;
    info!("loaded {} addresses from {}", addresses.len(), input.display());

    let dispatcher = Dispatcher::new(resolver, options);
    let records = dispatcher.run(&addresses);

    write_report_file(output, &records)?;
    info!("report written to {}", output.display());

    let summary = Summary::from_records(&records);
    info!(%summary, "run complete");
    Ok(summary)
}
