// src/strength/mod.rs
use std::collections::HashSet;

use crate::models::{StrengthLevel, StrengthReport};
use crate::utils::has_identical_run;

pub const MIN_LENGTH: usize = 16;
pub const MAX_SCORE: u8 = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";
const COMMON_PATTERNS: [&str; 4] = ["123", "abc", "qwerty", "password"];
const DIVERSITY_THRESHOLD: f64 = 0.7;

struct Check {
    passed: bool,
    met: &'static str,
    failed: &'static str,
}

/// Scores a password against seven fixed checks plus a character diversity bonus.
pub struct StrengthScorer;

impl StrengthScorer {
    pub fn new() -> Self {
        StrengthScorer
    }

    pub fn score(&self, password: &str) -> StrengthReport {
        let chars: Vec<char> = password.chars().collect();
        let lowered = password.to_lowercase();

        let checks = [
            Check {
                passed: chars.len() >= MIN_LENGTH,
                met: "Minimum 16 characters",
                failed: "Password must be at least 16 characters long",
            },
            Check {
                passed: chars.iter().any(|c| c.is_ascii_uppercase()),
                met: "Contains uppercase letter",
                failed: "Must contain uppercase letter",
            },
            Check {
                passed: chars.iter().any(|c| c.is_ascii_lowercase()),
                met: "Contains lowercase letter",
                failed: "Must contain lowercase letter",
            },
            // ASCII 0-9 only; other Unicode digits do not count.
            Check {
                passed: chars.iter().any(|c| c.is_ascii_digit()),
                met: "Contains number",
                failed: "Must contain number",
            },
            Check {
                passed: chars.iter().any(|&c| SPECIAL_CHARS.contains(c)),
                met: "Contains special character",
                failed: "Must contain special character",
            },
            // Any character repeats, line breaks included.
            Check {
                passed: !has_identical_run(&chars, 3),
                met: "No character repetition",
                failed: "Cannot contain repeating characters",
            },
            Check {
                passed: !COMMON_PATTERNS.iter().any(|pattern| lowered.contains(pattern)),
                met: "No common patterns",
                failed: "Contains common password pattern",
            },
        ];

        let mut score = 0;
        let mut requirements_met = Vec::new();
        let mut requirements_failed = Vec::new();

        for check in checks {
            if check.passed {
                score += 1;
                requirements_met.push(check.met.to_string());
            } else {
                requirements_failed.push(check.failed.to_string());
            }
        }

        // Bonus only: never listed as a failure.
        if diversity_ratio(password) > DIVERSITY_THRESHOLD {
            score += 1;
            requirements_met.push("Good character diversity".to_string());
        }

        StrengthReport {
            strength: StrengthLevel::from_score(score),
            score,
            max_score: MAX_SCORE,
            requirements_met,
            requirements_failed,
        }
    }
}

impl Default for StrengthScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct characters divided by length; 0.0 for an empty password.
pub fn diversity_ratio(password: &str) -> f64 {
    let total = password.chars().count();
    if total == 0 {
        return 0.0;
    }
    let distinct: HashSet<char> = password.chars().collect();
    distinct.len() as f64 / total as f64
}
