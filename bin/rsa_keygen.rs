//! `rsa-keygen` — generates an RSA key pair and writes it as a JSON envelope
//! (spec §6.3, §6.4).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use nebula_crypto::cancellation::NeverCancelled;
use nebula_crypto::entropy::OsEntropy;
use nebula_crypto::envelope::Envelope;
use nebula_crypto::rsa::generate_key_pair;

#[derive(Parser)]
#[command(name = "rsa-keygen")]
#[command(about = "Generate an RSA key pair and write it as a JSON envelope")]
struct Cli {
    /// Output file for the key-pair envelope ('-' for stdout)
    #[arg(short = 'o', value_name = "FILE", default_value = "-")]
    output: String,
}

fn init_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(io::stderr())
        .apply()
        .ok();
}

fn run(cli: Cli) -> Result<(), String> {
    let mut entropy = OsEntropy::new();

    info!("generating 2048-bit RSA key pair");
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled)
        .map_err(|e| format!("key generation failed: {e}"))?
        .expect("NeverCancelled never reports cancellation");

    let envelope = Envelope::new(public, private);
    let json = envelope.to_json();

    if cli.output == "-" {
        io::stdout()
            .write_all(json.as_bytes())
            .map_err(|e| format!("writing output: {e}"))?;
    } else {
        fs::write(PathBuf::from(&cli.output), &json)
            .map_err(|e| format!("writing {}: {e}", cli.output))?;
    }

    info!("key pair written");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
