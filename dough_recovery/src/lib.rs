//! Dough Wallet recovery: 12-word phrase in, Dogecoin addresses and WIF
//! private keys out, using the wallet's non-standard hardened derivation.

pub mod config;
pub mod error;
pub mod mnemonic;
pub mod report;
pub mod wallet;

pub use config::{Cli, OutputFormat, RecoveryConfig};
pub use error::{RecoveryError, RecoveryResult};
pub use mnemonic::RecoveryPhrase;
pub use wallet::{Chain, DerivedEntry, RecoveryReport, WalletRecovery};

use std::io::{BufRead, Write};
use zeroize::Zeroizing;

/// Read one line of input and validate it as a recovery phrase.
pub fn read_phrase<R: BufRead>(input: &mut R) -> RecoveryResult<RecoveryPhrase> {
    let mut line = Zeroizing::new(String::new());
    if input.read_line(&mut line)? == 0 {
        return Err(RecoveryError::EmptyInput);
    }
    RecoveryPhrase::parse(&line)
}

/// One full recovery run.
///
/// In text mode the banner and prompt go to `out` ahead of the report; in
/// JSON mode they go to `console` so `out` carries only the document. Nothing
/// is derived until the phrase has been validated.
pub fn run<R, W, E>(
    config: &RecoveryConfig,
    mut input: R,
    out: &mut W,
    console: &mut E,
) -> RecoveryResult<RecoveryReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if config.banner {
        match config.format {
            OutputFormat::Text => report::write_banner(out)?,
            OutputFormat::Json => report::write_banner(console)?,
        }
    }

    let phrase = read_phrase(&mut input)?;
    if !phrase.has_valid_checksum() {
        tracing::warn!("recovery phrase fails the BIP-39 checksum; deriving anyway");
    }

    let seed = phrase.to_seed();
    let wallet = WalletRecovery::from_seed(&seed[..]);
    let report = wallet.report(config.count);

    match config.format {
        OutputFormat::Text => report::render_text(&report, out)?,
        OutputFormat::Json => report::render_json(&report, out)?,
    }
    Ok(report)
}
