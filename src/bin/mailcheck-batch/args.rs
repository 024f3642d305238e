use std::path::PathBuf;

use clap::Parser;
use mailcheck_batch::{DispatchOptions, DnsOptions, ValidationMode};

#[derive(Parser)]
#[command(name = "mailcheck-batch", version, about)]
pub struct Cli {
    /// fichier d'entrée: une adresse par ligne, `#` pour les commentaires
    pub input: PathBuf,

    /// rapport CSV (email,status,motivo)
    pub output: PathBuf,

    /// nombre de workers (défaut: nombre de CPU)
    pub workers: Option<usize>,

    /// mode: strict|relaxed
    #[arg(long, default_value = "strict")]
    pub mode: String,

    /// timeout par requête DNS (ms, 0 = valeur système)
    #[arg(long = "timeout-ms", default_value_t = 3_000)]
    pub timeout_ms: u64,

    /// logs détaillés (une ligne par adresse)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            workers: self.workers.unwrap_or(0),
            validation_mode: mode_from_str(&self.mode),
        }
    }

    pub fn dns_options(&self) -> DnsOptions {
        DnsOptions {
            timeout_ms: self.timeout_ms,
        }
    }
}

pub fn mode_from_str(s: &str) -> ValidationMode {
    match s {
        "relaxed" => ValidationMode::Relaxed,
        _ => ValidationMode::Strict,
    }
}
