mod args;
mod logging;

use anyhow::{Context, Result};
use mailcheck_batch::{DnsResolver, pipeline};

use crate::args::Cli;

// codes de sortie : 0 OK (adresses invalides comprises), 1 fatal
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let resolver =
        DnsResolver::from_system_conf(&cli.dns_options()).context("DNS resolver setup")?;

    pipeline::run(&cli.input, &cli.output, resolver, cli.dispatch_options()).with_context(
        || {
            format!(
                "validation of {} -> {} failed",
                cli.input.display(),
                cli.output.display()
            )
        },
    )?;
    Ok(())
}
