// src/generators/complex.rs
use lazy_static::lazy_static;
use log::debug;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::charset::{CharacterClass, DIGITS, EXTRA_SPECIAL, LOWERCASE, SPECIAL, UPPERCASE};
use super::{fresh_rng, GeneratorError, LengthPolicy, Result};
use crate::utils::{has_class_run, has_identical_run};

pub const COMPLEX_LENGTH: LengthPolicy = LengthPolicy {
    default: 16,
    min: 16,
    max: 100,
};

/// Re-permutations of one candidate before the fix-up takes over.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 1_000;

const RUN_LIMIT: usize = 3;

lazy_static! {
    static ref SEED_CLASSES: [&'static CharacterClass; 5] =
        [&*UPPERCASE, &*LOWERCASE, &*DIGITS, &*SPECIAL, &*EXTRA_SPECIAL];
    static ref POOL: CharacterClass = CharacterClass::union(
        "complex",
        &[&*LOWERCASE, &*UPPERCASE, &*DIGITS, &*SPECIAL, &*EXTRA_SPECIAL],
    );
}

/// Generates passwords that cover every seed class and contain no runs of
/// three identical characters, three digits or three letters.
pub struct ComplexGenerator;

impl ComplexGenerator {
    pub fn new() -> Self {
        ComplexGenerator
    }

    pub fn generate(&self, length: usize) -> Result<String> {
        let mut rng = fresh_rng()?;
        self.generate_with(length, &mut rng)
    }

    /// `length` must be at least the number of seed classes (5). The HTTP
    /// layer clamps to [`COMPLEX_LENGTH`] before calling.
    pub fn generate_with<R: Rng + CryptoRng>(&self, length: usize, rng: &mut R) -> Result<String> {
        if length < SEED_CLASSES.len() {
            return Err(GeneratorError::LengthTooShort {
                length,
                minimum: SEED_CLASSES.len(),
            });
        }

        let mut candidate: Vec<char> = SEED_CLASSES.iter().map(|class| class.sample(rng)).collect();
        candidate.extend((SEED_CLASSES.len()..length).map(|_| POOL.sample(rng)));
        candidate.shuffle(rng);

        let mut attempts = 1;
        while has_forbidden_pattern(&candidate) {
            if attempts >= MAX_SHUFFLE_ATTEMPTS {
                debug!(
                    "No valid ordering after {} shuffles for length {}, rearranging",
                    attempts, length
                );
                candidate = arrange(rebalance(candidate, rng), rng);
                if has_forbidden_pattern(&candidate) {
                    return Err(GeneratorError::Unsatisfiable);
                }
                break;
            }
            candidate.shuffle(rng);
            attempts += 1;
        }

        Ok(candidate.into_iter().collect())
    }
}

impl Default for ComplexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Any three identical characters, three digits, or three ASCII letters in a row.
/// Letter runs ignore case, so "aAa" counts.
pub fn has_forbidden_pattern(chars: &[char]) -> bool {
    has_identical_run(chars, RUN_LIMIT)
        || has_class_run(chars, RUN_LIMIT, |c| c.is_ascii_digit())
        || has_class_run(chars, RUN_LIMIT, |c| c.is_ascii_alphabetic())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    Letter = 0,
    Digit = 1,
    Symbol = 2,
}

impl Group {
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Group::Letter
        } else if c.is_ascii_digit() {
            Group::Digit
        } else {
            Group::Symbol
        }
    }
}

// A group can be laid out with at most two in a row only if it has no more
// than 2 * (others + 1) members. Surplus members are swapped for characters
// of another group, keeping at least one member of every seed class.
fn rebalance<R: Rng + ?Sized>(mut chars: Vec<char>, rng: &mut R) -> Vec<char> {
    for group in [Group::Letter, Group::Digit, Group::Symbol] {
        loop {
            let members = chars.iter().filter(|&&c| Group::of(c) == group).count();
            if members <= 2 * (chars.len() - members + 1) {
                break;
            }

            let Some(pos) = chars
                .iter()
                .position(|&c| Group::of(c) == group && !is_last_of_seed_class(&chars, c))
            else {
                break;
            };

            chars[pos] = match group {
                Group::Letter | Group::Digit => SPECIAL.sample(rng),
                Group::Symbol => LOWERCASE.sample(rng),
            };
        }
    }
    chars
}

fn is_last_of_seed_class(chars: &[char], c: char) -> bool {
    SEED_CLASSES
        .iter()
        .find(|class| class.contains(c))
        .map(|class| chars.iter().filter(|&&other| class.contains(other)).count() <= 1)
        .unwrap_or(false)
}

// Lays the characters out one group at a time, never three from the same
// group in a row. Each step picks among the groups that keep the rest
// placeable, weighted by how many members they have left, so the class
// layout varies from one call to the next.
fn arrange<R: Rng + ?Sized>(chars: Vec<char>, rng: &mut R) -> Vec<char> {
    let total = chars.len();
    let mut groups: [Vec<char>; 3] = Default::default();
    for c in chars {
        groups[Group::of(c) as usize].push(c);
    }
    for group in groups.iter_mut() {
        group.shuffle(rng);
    }

    let mut out = Vec::with_capacity(total);
    let mut last: Option<usize> = None;
    let mut streak = 0;

    while out.len() < total {
        let mut counts = [0; 3];
        for (g, group) in groups.iter().enumerate() {
            counts[g] = group.len();
        }

        let candidates: Vec<usize> = (0..groups.len())
            .filter(|&g| counts[g] > 0 && !(last == Some(g) && streak >= 2))
            .collect();
        let safe: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&g| {
                let next_streak = if last == Some(g) { streak + 1 } else { 1 };
                let mut after = counts;
                after[g] -= 1;
                is_placeable(&after, g, next_streak)
            })
            .collect();

        let next = if safe.is_empty() {
            candidates.iter().copied().max_by_key(|&g| counts[g])
        } else {
            pick_weighted(&safe, &counts, rng)
        };
        let Some(g) = next else { break };
        let Some(c) = groups[g].pop() else { break };

        out.push(c);
        if last == Some(g) {
            streak += 1;
        } else {
            last = Some(g);
            streak = 1;
        }
    }

    // Only reached on a dead end; the caller's validation rejects the result.
    for group in groups {
        out.extend(group);
    }
    out
}

// Whether `counts` can still be laid out when the last placed character
// belongs to group `last` and ended a run of `streak`.
fn is_placeable(counts: &[usize; 3], last: usize, streak: usize) -> bool {
    let remaining: usize = counts.iter().sum();
    counts.iter().enumerate().all(|(g, &n)| {
        let others = remaining - n;
        if g == last {
            n <= 2 * others + (2 - streak.min(2))
        } else {
            n <= 2 * (others + 1)
        }
    })
}

fn pick_weighted<R: Rng + ?Sized>(choices: &[usize], counts: &[usize; 3], rng: &mut R) -> Option<usize> {
    let weight: usize = choices.iter().map(|&g| counts[g]).sum();
    if weight == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..weight);
    for &g in choices {
        if roll < counts[g] {
            return Some(g);
        }
        roll -= counts[g];
    }
    None
}
