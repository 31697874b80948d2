use crate::wallet::{ChainReport, RecoveryReport};
use std::io::{self, Write};

pub const BANNER: &str = concat!(
    " --------------------------- \n",
    "|   Dough Wallet Recovery   |\n",
    " --------------------------- \n",
);

pub const PROMPT: &str = "Enter your Dough Wallet's 12-word recovery phrase:";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", PROMPT)?;
    out.flush()
}

fn write_chain<W: Write>(out: &mut W, chain: &ChainReport) -> io::Result<()> {
    writeln!(out, "{}: {}", chain.chain.label(), chain.path)?;
    writeln!(out)?;
    for entry in &chain.entries {
        writeln!(out, "  {}", entry.path)?;
        writeln!(out, "    Address:     {}", entry.address)?;
        writeln!(out, "    Private Key: {}", entry.private_key)?;
    }
    Ok(())
}

pub fn render_text<W: Write>(report: &RecoveryReport, out: &mut W) -> io::Result<()> {
    for chain in report.chains() {
        writeln!(out)?;
        write_chain(out, chain)?;
    }
    writeln!(out)?;
    out.flush()
}

pub fn render_json<W: Write>(report: &RecoveryReport, out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{Chain, DerivedEntry};
    use pretty_assertions::assert_eq;

    fn sample() -> RecoveryReport {
        let entry = |chain: u32| DerivedEntry {
            path: format!("m/0'/{}/0", chain),
            address: format!("Daddr{}", chain),
            private_key: format!("Qkey{}", chain),
        };
        RecoveryReport {
            external: ChainReport {
                chain: Chain::External,
                path: "m/0'/0/n".into(),
                entries: vec![entry(0)],
            },
            internal: ChainReport {
                chain: Chain::Internal,
                path: "m/0'/1/n".into(),
                entries: vec![entry(1)],
            },
        }
    }

    #[test]
    fn text_layout() {
        let mut out = Vec::new();
        render_text(&sample(), &mut out).unwrap();
        let expected = "\nExternal (Receive) Chain: m/0'/0/n\n\n  m/0'/0/0\n    Address:     Daddr0\n    Private Key: Qkey0\n\nInternal (Change) Chain: m/0'/1/n\n\n  m/0'/1/0\n    Address:     Daddr1\n    Private Key: Qkey1\n\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn json_layout() {
        let mut out = Vec::new();
        render_json(&sample(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["external"]["chain"], "external");
        assert_eq!(value["internal"]["entries"][0]["address"], "Daddr1");
        assert_eq!(value["external"]["entries"][0]["private_key"], "Qkey0");
    }

    #[test]
    fn banner_ends_with_prompt() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(" ---"));
        assert!(text.trim_end().ends_with(PROMPT));
    }
}
