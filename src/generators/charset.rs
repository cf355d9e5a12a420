// src/generators/charset.rs
use lazy_static::lazy_static;
use rand::Rng;

/// A named, immutable set of characters used for sampling.
#[derive(Debug, Clone)]
pub struct CharacterClass {
    name: &'static str,
    chars: Vec<char>,
}

impl CharacterClass {
    fn new(name: &'static str, chars: impl IntoIterator<Item = char>) -> Self {
        let chars: Vec<char> = chars.into_iter().collect();
        debug_assert!(!chars.is_empty(), "character class {} is empty", name);
        Self { name, chars }
    }

    /// Concatenate several classes into one sampling pool.
    pub fn union(name: &'static str, classes: &[&CharacterClass]) -> Self {
        Self::new(name, classes.iter().flat_map(|class| class.chars.iter().copied()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Pick one character uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

lazy_static! {
    pub static ref UPPERCASE: CharacterClass = CharacterClass::new("uppercase", 'A'..='Z');
    pub static ref LOWERCASE: CharacterClass = CharacterClass::new("lowercase", 'a'..='z');
    pub static ref DIGITS: CharacterClass = CharacterClass::new("digit", '0'..='9');

    /// Special ASCII characters used by the complex generator.
    pub static ref SPECIAL: CharacterClass =
        CharacterClass::new("special", "!@#$%^&*()_+-=[]{}|;:,.<>?".chars());

    /// Quote-like characters the complex generator always includes.
    pub static ref EXTRA_SPECIAL: CharacterClass =
        CharacterClass::new("extra-special", "~`'\"".chars());

    /// Every ASCII punctuation character.
    pub static ref PUNCTUATION: CharacterClass =
        CharacterClass::new("punctuation", r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##.chars());

    /// Printable Latin-1 characters from U+00A1 to U+00FF. The soft hyphen
    /// (U+00AD) is a format character and is left out.
    pub static ref EXTENDED_PRINTABLE: CharacterClass = CharacterClass::new(
        "extended-printable",
        (0xA1u8..=0xFF).filter(|&b| b != 0xAD).map(char::from),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_class_sizes() {
        assert_eq!(UPPERCASE.chars().len(), 26);
        assert_eq!(LOWERCASE.chars().len(), 26);
        assert_eq!(DIGITS.chars().len(), 10);
        assert_eq!(SPECIAL.chars().len(), 26);
        assert_eq!(EXTRA_SPECIAL.chars().len(), 4);
        assert_eq!(PUNCTUATION.chars().len(), 32);
        assert_eq!(EXTENDED_PRINTABLE.chars().len(), 94);
    }

    #[test]
    fn test_extended_printable_range() {
        assert!(EXTENDED_PRINTABLE.contains('¡'));
        assert!(EXTENDED_PRINTABLE.contains('ÿ'));
        assert!(!EXTENDED_PRINTABLE.contains('\u{00AD}'));
        assert!(!EXTENDED_PRINTABLE.contains('\u{00A0}'));
        assert!(EXTENDED_PRINTABLE.chars().iter().all(|c| !c.is_control()));
    }

    #[test]
    fn test_punctuation_matches_ascii_definition() {
        let expected: Vec<char> = (0u8..128)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        let mut actual = PUNCTUATION.chars().to_vec();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_union_and_sample() {
        let pool = CharacterClass::union("pool", &[&DIGITS, &EXTRA_SPECIAL]);
        assert_eq!(pool.name(), "pool");
        assert_eq!(pool.chars().len(), 14);

        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(pool.contains(pool.sample(&mut rng)));
        }
    }
}
