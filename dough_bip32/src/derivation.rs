use crate::{
    KeyError,
    extended_key::{ExtendedKey, HARDENED_MARKER, hardened, is_hardened},
};
use secp256k1::{Secp256k1, Signing};
use std::fmt;
use std::str::FromStr;

/// A derivation path whose hardened components carry the wallet's marker
/// (e.g. "m/0'/1/5").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivationPath(pub Vec<u32>);

impl FromStr for DerivationPath {
    type Err = KeyError;

    /// Parses "m/0'/0/3", "m/0h/1" or "0'/0". `'` and `h` mean "OR with
    /// the hardened marker".
    fn from_str(s: &str) -> Result<Self, KeyError> {
        let s = s.trim();
        let invalid = || KeyError::InvalidDerivationPath(s.to_string());

        let without_master = if s.eq_ignore_ascii_case("m") {
            return Ok(DerivationPath::default());
        } else if let Some(stripped) = s.strip_prefix("m/") {
            stripped
        } else {
            s
        };
        if without_master.is_empty() {
            return Ok(DerivationPath::default());
        }

        let mut indices = Vec::new();
        for part in without_master.split('/') {
            let (num_str, is_hard) = match part.strip_suffix('\'').or_else(|| part.strip_suffix('h')) {
                Some(stripped) => (stripped, true),
                None => (part, false),
            };
            let ordinal: u32 = num_str.parse().map_err(|_| invalid())?;
            // an ordinal that already touches the marker would silently change meaning
            if is_hardened(ordinal) {
                return Err(invalid());
            }
            indices.push(if is_hard { hardened(ordinal) } else { ordinal });
        }
        Ok(DerivationPath(indices))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for &index in &self.0 {
            if is_hardened(index) {
                write!(f, "/{}'", index & !HARDENED_MARKER)?;
            } else {
                write!(f, "/{}", index)?;
            }
        }
        Ok(())
    }
}

impl DerivationPath {
    /// This path extended by one component.
    pub fn child(&self, index: u32) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        DerivationPath(indices)
    }

    /// Walk the path from `master`. Each step feeds the next, so this is
    /// inherently sequential.
    pub fn derive<C: Signing>(&self, secp: &Secp256k1<C>, master: &ExtendedKey) -> ExtendedKey {
        self.0
            .iter()
            .fold(*master, |node, &index| node.derive_child(secp, index))
    }
}
