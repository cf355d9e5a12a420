// src/utils/runs.rs

// Scans for runs of `min_len` adjacent characters. `min_len` must be non-zero.

/// True when `min_len` identical characters appear back to back.
pub fn has_identical_run(chars: &[char], min_len: usize) -> bool {
    chars
        .windows(min_len)
        .any(|window| window.iter().all(|&c| c == window[0]))
}

/// True when `min_len` adjacent characters all satisfy `pred`.
pub fn has_class_run<F>(chars: &[char], min_len: usize, pred: F) -> bool
where
    F: Fn(char) -> bool,
{
    chars
        .windows(min_len)
        .any(|window| window.iter().all(|&c| pred(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_run() {
        assert!(has_identical_run(&chars("xaaay"), 3));
        assert!(!has_identical_run(&chars("xaay"), 3));
        assert!(!has_identical_run(&chars(""), 3));
        assert!(!has_identical_run(&chars("aa"), 3));
    }

    #[test]
    fn test_class_run_is_case_insensitive_for_letters() {
        assert!(has_class_run(&chars("1aAa2"), 3, |c| c.is_ascii_alphabetic()));
        assert!(!has_class_run(&chars("aA1aA"), 3, |c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_class_run_digits() {
        assert!(has_class_run(&chars("a907b"), 3, |c| c.is_ascii_digit()));
        assert!(!has_class_run(&chars("90a7"), 3, |c| c.is_ascii_digit()));
    }
}
