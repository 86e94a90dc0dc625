//! `rsa-sign` — signs a message with the SHA-256 + RSA composite scheme
//! (spec §4.6, §6.4).

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use nebula_crypto::envelope::Envelope;
use nebula_crypto::rsa::key::KEY_SIZE_BYTES;
use nebula_crypto::signatures::digital_signature;

#[derive(Parser)]
#[command(name = "rsa-sign")]
#[command(about = "Sign a message with the SHA-256 + RSA composite scheme")]
struct Cli {
    /// Key-pair envelope file supplying the public key
    #[arg(short = 'p', value_name = "FILE")]
    public_key: PathBuf,

    /// Key-pair envelope file supplying the private key
    #[arg(short = 'q', value_name = "FILE")]
    private_key: PathBuf,

    /// Input message file ('-' for stdin)
    #[arg(short = 'i', value_name = "FILE", default_value = "-")]
    input: String,

    /// Output signature file ('-' for stdout)
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

fn read_input(path: &str) -> Result<Vec<u8>, String> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("reading stdin: {e}"))?;
        Ok(buf)
    } else {
        fs::read(path).map_err(|e| format!("reading {path}: {e}"))
    }
}

fn read_envelope(path: &PathBuf) -> Result<Envelope, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    Envelope::from_json(&json).map_err(|e| format!("parsing {}: {e}", path.display()))
}

fn run(cli: Cli) -> Result<(), String> {
    let public_envelope = read_envelope(&cli.public_key)?;
    let private_envelope = read_envelope(&cli.private_key)?;
    let message = read_input(&cli.input)?;

    info!("signing {} bytes", message.len());
    let signature: [u8; KEY_SIZE_BYTES] = digital_signature::sign(
        &public_envelope.public,
        &private_envelope.private,
        &message,
    );

    if cli.output == "-" {
        io::stdout()
            .write_all(&signature)
            .map_err(|e| format!("writing output: {e}"))?;
    } else {
        fs::write(&cli.output, signature).map_err(|e| format!("writing {}: {e}", cli.output))?;
    }

    info!("signature written");
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
