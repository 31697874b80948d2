use crate::error::{RecoveryError, RecoveryResult};
use bip39::{Language, Mnemonic};
use sha2::Sha512;
use std::fmt;
use zeroize::Zeroizing;

/// Dough Wallet phrases are always 12 words.
pub const PHRASE_WORDS: usize = 12;

const SEED_SALT: &[u8] = b"mnemonic";
const SEED_ROUNDS: u32 = 2048;

/// A normalized 12-word phrase whose words are all in the English BIP-39
/// wordlist. The checksum is not enforced.
pub struct RecoveryPhrase {
    phrase: Zeroizing<String>,
}

impl fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl RecoveryPhrase {
    /// Trim, lowercase and collapse whitespace, then validate word count and
    /// wordlist membership. Words are reported 1-based.
    pub fn parse(line: &str) -> RecoveryResult<Self> {
        let lowered = Zeroizing::new(line.trim().to_lowercase());
        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.len() != PHRASE_WORDS {
            return Err(RecoveryError::WordCount(words.len()));
        }

        for (i, word) in words.iter().enumerate() {
            if Language::English.find_word(word).is_none() {
                return Err(RecoveryError::UnknownWord {
                    position: i + 1,
                    word: word.to_string(),
                });
            }
        }

        Ok(Self {
            phrase: Zeroizing::new(words.join(" ")),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Whether the phrase also passes the BIP-39 checksum. Derivation does not
    /// depend on it.
    pub fn has_valid_checksum(&self) -> bool {
        Mnemonic::parse_in_normalized(Language::English, &self.phrase).is_ok()
    }

    /// BIP-39 seed with an empty passphrase:
    /// PBKDF2-HMAC-SHA512(phrase, "mnemonic", 2048 rounds, 64 bytes).
    pub fn to_seed(&self) -> Zeroizing<[u8; 64]> {
        let mut seed = Zeroizing::new([0u8; 64]);
        pbkdf2::pbkdf2_hmac::<Sha512>(self.phrase.as_bytes(), SEED_SALT, SEED_ROUNDS, &mut seed[..]);
        seed
    }
}
