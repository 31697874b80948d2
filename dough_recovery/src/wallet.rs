//! Walks the fixed Dough Wallet tree: `m/0'` then `m/0'/0/n` (receive) and
//! `m/0'/1/n` (change).

use dough_bip32::{
    DerivationPath, ExtendedKey, hardened, private_key_to_wif, public_key_to_address,
};
use secp256k1::{All, Secp256k1};
use serde::Serialize;

/// Ordinal of the only account the wallet uses.
pub const ACCOUNT_ORDINAL: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    External,
    Internal,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::External, Chain::Internal];

    pub fn index(self) -> u32 {
        match self {
            Chain::External => 0,
            Chain::Internal => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Chain::External => "External (Receive) Chain",
            Chain::Internal => "Internal (Change) Chain",
        }
    }
}

/// One recovered address with its exportable private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedEntry {
    pub path: String,
    pub address: String,
    pub private_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub chain: Chain,
    pub path: String,
    pub entries: Vec<DerivedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryReport {
    pub external: ChainReport,
    pub internal: ChainReport,
}

impl RecoveryReport {
    pub fn chains(&self) -> [&ChainReport; 2] {
        [&self.external, &self.internal]
    }
}

/// Account and chain roots derived once from a seed. Leaves are derived on
/// demand and do not depend on each other.
#[derive(Debug)]
pub struct WalletRecovery {
    secp: Secp256k1<All>,
    account_path: DerivationPath,
    account: ExtendedKey,
    external: ExtendedKey,
    internal: ExtendedKey,
}

impl WalletRecovery {
    pub fn from_seed(seed: &[u8]) -> Self {
        let secp = Secp256k1::new();
        let master = ExtendedKey::master(seed);
        let account_path = DerivationPath(vec![hardened(ACCOUNT_ORDINAL)]);
        let account = account_path.derive(&secp, &master);
        let external = account.derive_child(&secp, Chain::External.index());
        let internal = account.derive_child(&secp, Chain::Internal.index());
        tracing::debug!(account = %account_path, "derived account and chain roots");

        WalletRecovery {
            secp,
            account_path,
            account,
            external,
            internal,
        }
    }

    pub fn account(&self) -> &ExtendedKey {
        &self.account
    }

    pub fn chain_root(&self, chain: Chain) -> &ExtendedKey {
        match chain {
            Chain::External => &self.external,
            Chain::Internal => &self.internal,
        }
    }

    pub fn chain_path(&self, chain: Chain) -> DerivationPath {
        self.account_path.child(chain.index())
    }

    /// Leaf `index` of `chain`. The path shows the raw index, as the wallet does.
    pub fn entry(&self, chain: Chain, index: u32) -> DerivedEntry {
        let leaf = self.chain_root(chain).derive_child(&self.secp, index);
        DerivedEntry {
            path: format!("{}/{}", self.chain_path(chain), index),
            address: public_key_to_address(&leaf.public_key(&self.secp)),
            private_key: private_key_to_wif(&leaf.private_key),
        }
    }

    pub fn entries(&self, chain: Chain, count: u32) -> Vec<DerivedEntry> {
        (0..count).map(|n| self.entry(chain, n)).collect()
    }

    pub fn chain_report(&self, chain: Chain, count: u32) -> ChainReport {
        ChainReport {
            chain,
            path: format!("{}/n", self.chain_path(chain)),
            entries: self.entries(chain, count),
        }
    }

    pub fn report(&self, count: u32) -> RecoveryReport {
        tracing::debug!(count, "deriving leaf addresses");
        RecoveryReport {
            external: self.chain_report(Chain::External, count),
            internal: self.chain_report(Chain::Internal, count),
        }
    }
}
