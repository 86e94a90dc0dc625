//! `rsa-verify` — verifies a SHA-256 + RSA composite signature (spec §4.6,
//! §6.4). Prints one of two fixed strings; the exit code never leaks which
//! step of verification failed.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use nebula_crypto::envelope::Envelope;
use nebula_crypto::rsa::key::KEY_SIZE_BYTES;
use nebula_crypto::signatures::digital_signature;

#[derive(Parser)]
#[command(name = "rsa-verify")]
#[command(about = "Verify a SHA-256 + RSA composite signature")]
struct Cli {
    /// Key-pair envelope file supplying the public key
    #[arg(short = 'p', value_name = "FILE")]
    public_key: PathBuf,

    /// Key-pair envelope file supplying the private key. Verification itself
    /// only needs the public key, but the flag is required alongside `-p`
    /// for symmetry with `rsa-sign`'s invocation.
    #[arg(short = 'q', value_name = "FILE")]
    private_key: PathBuf,

    /// Input message file ('-' for stdin)
    #[arg(short = 'i', value_name = "FILE", default_value = "-")]
    input: String,

    /// Detached signature file
    #[arg(short = 's', value_name = "FILE")]
    signature: PathBuf,
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

/// Returns `Ok(true)` for a valid signature, `Ok(false)` for an invalid one.
/// IO and usage errors (missing files, malformed envelopes, wrong-length
/// signatures) are kept distinct from a crypto rejection.
fn run(cli: Cli) -> Result<bool, String> {
    let envelope_json = fs::read_to_string(&cli.public_key)
        .map_err(|e| format!("reading {}: {e}", cli.public_key.display()))?;
    let envelope = Envelope::from_json(&envelope_json)
        .map_err(|e| format!("parsing {}: {e}", cli.public_key.display()))?;

    // Not used by the verification transform itself, but `-q` is required
    // and must name a valid envelope, matching `rsa-sign`'s invocation.
    let private_json = fs::read_to_string(&cli.private_key)
        .map_err(|e| format!("reading {}: {e}", cli.private_key.display()))?;
    Envelope::from_json(&private_json)
        .map_err(|e| format!("parsing {}: {e}", cli.private_key.display()))?;

    let message = read_input(&cli.input)?;

    let signature_bytes = fs::read(&cli.signature)
        .map_err(|e| format!("reading {}: {e}", cli.signature.display()))?;
    let signature: [u8; KEY_SIZE_BYTES] = signature_bytes
        .as_slice()
        .try_into()
        .map_err(|_| format!("signature must be exactly {KEY_SIZE_BYTES} bytes"))?;

    info!("verifying {} bytes", message.len());
    Ok(digital_signature::verify(&envelope.public, &message, &signature).is_ok())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {
            println!("valid signature");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("invalid signature");
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
