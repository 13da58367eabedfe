mod args;

use args::{CipherArgs, Cli, Commands};
use clap::Parser;

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use aes_text::{CipherOptions, resolve};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input is not valid UTF-8")]
    InputNotUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aes_text::Error),
}

fn main() -> ExitCode {
    init_tracing();

    if let Err(e) = aes_cli() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let plaintext = read_payload(&enc)?;
            let options = cipher_options(&enc);

            let start = Instant::now();
            let ciphertext = aes_text::encrypt(&plaintext, &options)?;
            debug!(elapsed = ?start.elapsed(), "encrypted");

            write_output(&enc, &ciphertext)?;
        }
        Commands::Decrypt(dec) => {
            // encoded ciphertext read from a file usually ends with a newline
            let payload = read_payload(&dec)?;
            let options = cipher_options(&dec);

            let start = Instant::now();
            let plaintext = aes_text::decrypt(payload.trim(), &options)?;
            debug!(elapsed = ?start.elapsed(), "decrypted");

            write_output(&dec, &plaintext)?;
        }
        Commands::GenKey(gen_key) => {
            let key = aes_text::random_key_text(gen_key.key_size.into())?;
            let iv = aes_text::random_iv_text()?;
            let mut out = io::stdout().lock();
            writeln!(out, "key: {key}")?;
            writeln!(out, "iv:  {iv}")?;
        }
    }

    Ok(())
}

fn cipher_options(args: &CipherArgs) -> CipherOptions {
    let resolution = resolve(&args.mode, &args.padding);
    CipherOptions::new(args.key.as_str(), args.iv.as_str())
        .with_mode(resolution.mode)
        .with_padding(resolution.padding)
        .with_key_size(args.key_size.into())
        .with_encoding(args.encoding.into())
}

fn read_payload(args: &CipherArgs) -> Result<String, CliError> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let bytes = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    info!(len = bytes.len(), "read input");
    Ok(String::from_utf8(bytes)?)
}

fn write_output(args: &CipherArgs, text: &str) -> Result<(), CliError> {
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut out = io::stdout().lock();
            write!(out, "{}", line_terminated(text))?;
        }
    }
    Ok(())
}

/// Adds a trailing newline unless `text` already ends with one.
fn line_terminated(text: &str) -> Cow<'_, str> {
    if text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}\n"))
    }
}
