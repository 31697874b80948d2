use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled sections, one block per address
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dough-recovery")]
#[command(about = "Recover Dough Wallet addresses and private keys from a 12-word recovery phrase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Number of addresses to generate per chain
    #[arg(long, env = "DOUGH_RECOVERY_COUNT", default_value_t = 1)]
    pub count: u32,

    /// Output format
    #[arg(long, value_enum, env = "DOUGH_RECOVERY_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the banner and prompt
    #[arg(long)]
    pub no_banner: bool,
}

/// Settings for one recovery run, fixed once arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryConfig {
    pub count: u32,
    pub format: OutputFormat,
    pub banner: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        RecoveryConfig {
            count: 1,
            format: OutputFormat::Text,
            banner: true,
        }
    }
}

impl From<Cli> for RecoveryConfig {
    fn from(cli: Cli) -> Self {
        RecoveryConfig {
            count: cli.count,
            format: cli.format,
            banner: !cli.no_banner,
        }
    }
}
