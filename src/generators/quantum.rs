// src/generators/quantum.rs
use chrono::Utc;
use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use sha2::{Digest, Sha256};

use super::charset::{
    CharacterClass, DIGITS, EXTENDED_PRINTABLE, LOWERCASE, PUNCTUATION, UPPERCASE,
};
use super::{fresh_rng, GeneratorError, LengthPolicy, Result};

pub const QUANTUM_LENGTH: LengthPolicy = LengthPolicy {
    default: 24,
    min: 24,
    max: 100,
};

/// Hex characters appended after the random body.
pub const SUFFIX_LEN: usize = 8;

const SHUFFLE_PASSES: usize = 3;

lazy_static! {
    static ref SEED_CLASSES: [&'static CharacterClass; 5] =
        [&*UPPERCASE, &*LOWERCASE, &*DIGITS, &*PUNCTUATION, &*EXTENDED_PRINTABLE];

    /// Letters, digits, ASCII punctuation and printable Latin-1.
    pub static ref ALPHABET: CharacterClass = CharacterClass::union(
        "quantum",
        &[&*LOWERCASE, &*UPPERCASE, &*DIGITS, &*PUNCTUATION, &*EXTENDED_PRINTABLE],
    );
}

/// Generates a long password from the extended alphabet followed by a
/// time-derived tag.
///
/// The tag is the first eight hex digits of SHA-256 over the current Unix
/// time in seconds. Anyone who knows roughly when the password was made can
/// reproduce it, so it adds length but no secret entropy. Unlike
/// [`ComplexGenerator`](super::ComplexGenerator), no patterns are filtered out.
pub struct QuantumGenerator;

impl QuantumGenerator {
    pub fn new() -> Self {
        QuantumGenerator
    }

    /// Returns `length + 8` characters.
    pub fn generate(&self, length: usize) -> Result<String> {
        let mut rng = fresh_rng()?;
        self.generate_at(length, Utc::now().timestamp(), &mut rng)
    }

    pub fn generate_at<R: Rng + CryptoRng>(
        &self,
        length: usize,
        timestamp: i64,
        rng: &mut R,
    ) -> Result<String> {
        if length < SEED_CLASSES.len() {
            return Err(GeneratorError::LengthTooShort {
                length,
                minimum: SEED_CLASSES.len(),
            });
        }

        let mut body: Vec<char> = SEED_CLASSES.iter().map(|class| class.sample(rng)).collect();
        body.extend((SEED_CLASSES.len()..length).map(|_| ALPHABET.sample(rng)));
        for _ in 0..SHUFFLE_PASSES {
            body.shuffle(rng);
        }

        let mut password: String = body.into_iter().collect();
        password.push_str(&time_suffix(timestamp));
        Ok(password)
    }
}

impl Default for QuantumGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn time_suffix(timestamp: i64) -> String {
    let digest = Sha256::digest(timestamp.to_string().as_bytes());
    let mut suffix = hex::encode(digest);
    suffix.truncate(SUFFIX_LEN);
    suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_every_length_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(24);
        let generator = QuantumGenerator::new();

        for length in QUANTUM_LENGTH.min..=QUANTUM_LENGTH.max {
            let password = generator.generate_at(length, NOW, &mut rng).unwrap();
            let chars: Vec<char> = password.chars().collect();
            assert_eq!(chars.len(), length + SUFFIX_LEN);

            let (body, suffix) = chars.split_at(length);
            assert!(body.iter().all(|&c| ALPHABET.contains(c)));
            for class in SEED_CLASSES.iter() {
                assert!(body.iter().any(|&c| class.contains(c)), "missing {}", class.name());
            }
            assert!(suffix
                .iter()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_suffix_depends_only_on_time() {
        let generator = QuantumGenerator::new();
        let mut rng_a = ChaCha20Rng::seed_from_u64(1);
        let mut rng_b = ChaCha20Rng::seed_from_u64(2);

        let a = generator.generate_at(24, NOW, &mut rng_a).unwrap();
        let b = generator.generate_at(40, NOW, &mut rng_b).unwrap();

        assert!(a.ends_with(&time_suffix(NOW)));
        assert!(b.ends_with(&time_suffix(NOW)));
        assert_ne!(time_suffix(NOW), time_suffix(NOW + 1));
    }

    #[test]
    fn test_time_suffix_known_value() {
        // sha256("0") = 5feceb66ffc86f38...
        assert_eq!(time_suffix(0), "5feceb66");
        assert_eq!(time_suffix(NOW).len(), SUFFIX_LEN);
    }

    #[test]
    fn test_os_seeded_generation() {
        let password = QuantumGenerator::new().generate(QUANTUM_LENGTH.default).unwrap();
        assert_eq!(password.chars().count(), QUANTUM_LENGTH.default + SUFFIX_LEN);
    }

    #[test]
    fn test_length_below_seed_count_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(matches!(
            QuantumGenerator::new().generate_at(3, NOW, &mut rng),
            Err(GeneratorError::LengthTooShort { .. })
        ));
    }
}
