//! Brace-range filename expansion
//!
//! A pattern such as `log_{1...3}.txt` expands to `log_1.txt`, `log_2.txt`,
//! `log_3.txt`. Only the first `{start...end}` placeholder is recognized;
//! every occurrence of that exact placeholder text is substituted.
//!
//! ```rust
//! use retouch::pattern::expand;
//!
//! let names: Vec<String> = expand("log_{1...3}.txt").unwrap().collect();
//! assert_eq!(names, ["log_1.txt", "log_2.txt", "log_3.txt"]);
//!
//! let plain: Vec<String> = expand("report.txt").unwrap().collect();
//! assert_eq!(plain, ["report.txt"]);
//! ```

use crate::error::{Result, TouchError};
use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([0-9]+)\.\.\.([0-9]+)\}").unwrap());

/// Expand one filename pattern.
///
/// A pattern without a well-formed placeholder yields itself once. A range
/// whose end is below its start yields nothing. Fails only when a bound does
/// not fit in a `u64`.
pub fn expand(pattern: &str) -> Result<Expansion> {
    let Some(caps) = RANGE_PLACEHOLDER.captures(pattern) else {
        return Ok(Expansion {
            state: State::Single(Some(pattern.to_string())),
        });
    };

    let parse_bound = |s: &str| {
        s.parse::<u64>().map_err(|e| TouchError::InvalidRange {
            pattern: pattern.to_string(),
            reason: format!("bound '{}': {}", s, e),
        })
    };
    let start = parse_bound(&caps[1])?;
    let end = parse_bound(&caps[2])?;

    Ok(Expansion {
        state: State::Range {
            template: pattern.to_string(),
            placeholder: caps[0].to_string(),
            next: (start <= end).then_some(start),
            end,
        },
    })
}

/// Lazy, finite sequence of concrete filenames produced by [`expand`]
#[derive(Debug, Clone)]
pub struct Expansion {
    state: State,
}

#[derive(Debug, Clone)]
enum State {
    Single(Option<String>),
    Range {
        template: String,
        placeholder: String,
        /// `None` once exhausted
        next: Option<u64>,
        end: u64,
    },
}

impl Expansion {
    /// Whether the pattern contained a range placeholder
    pub fn is_range(&self) -> bool {
        matches!(self.state, State::Range { .. })
    }

    /// Number of filenames still to be produced
    pub fn remaining(&self) -> u64 {
        match &self.state {
            State::Single(name) => u64::from(name.is_some()),
            State::Range { next, end, .. } => next.map_or(0, |i| (end - i).saturating_add(1)),
        }
    }
}

impl Iterator for Expansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.state {
            State::Single(name) => name.take(),
            State::Range {
                template,
                placeholder,
                next,
                end,
            } => {
                let i = (*next)?;
                *next = if i == *end { None } else { Some(i + 1) };
                Some(template.replace(placeholder.as_str(), &i.to_string()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pattern: &str) -> Vec<String> {
        expand(pattern).unwrap().collect()
    }

    #[test]
    fn plain_name_is_returned_unchanged() {
        assert_eq!(names("report.txt"), ["report.txt"]);
        assert!(!expand("report.txt").unwrap().is_range());
    }

    #[test]
    fn range_expands_in_ascending_order() {
        assert_eq!(
            names("log_{1...3}.txt"),
            ["log_1.txt", "log_2.txt", "log_3.txt"]
        );
    }

    #[test]
    fn single_element_range() {
        assert_eq!(names("f{7...7}"), ["f7"]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let exp = expand("f{5...2}").unwrap();
        assert!(exp.is_range());
        assert_eq!(exp.remaining(), 0);
        assert_eq!(exp.count(), 0);
    }

    #[test]
    fn repeated_placeholder_is_substituted_everywhere() {
        assert_eq!(
            names("{1...2}/part_{1...2}.txt"),
            ["1/part_1.txt", "2/part_2.txt"]
        );
    }

    #[test]
    fn only_first_placeholder_is_expanded() {
        assert_eq!(names("a{1...2}b{5...6}"), ["a1b{5...6}", "a2b{5...6}"]);
    }

    #[test]
    fn leading_zeros_are_not_preserved() {
        assert_eq!(names("f{08...10}"), ["f8", "f9", "f10"]);
    }

    #[test]
    fn malformed_placeholders_are_literal() {
        assert_eq!(names("f{a...b}"), ["f{a...b}"]);
        assert_eq!(names("f{1..3}"), ["f{1..3}"]);
        assert_eq!(names("f{-1...3}"), ["f{-1...3}"]);
        assert_eq!(names("f{1...}"), ["f{1...}"]);
    }

    #[test]
    fn non_ascii_digits_are_literal() {
        assert_eq!(names("f{١...٣}.txt"), ["f{١...٣}.txt"]);
        assert_eq!(names("f{１...２}"), ["f{１...２}"]);
        assert!(!expand("f{１...２}").unwrap().is_range());
    }

    #[test]
    fn overflowing_bound_is_rejected() {
        let err = expand("f{1...99999999999999999999999}").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, TouchError::InvalidRange { .. }));
    }

    #[test]
    fn range_ending_at_u64_max_terminates() {
        let max = u64::MAX;
        let pattern = format!("f{{{}...{}}}", max - 1, max);
        let got = names(&pattern);
        assert_eq!(got, [format!("f{}", max - 1), format!("f{}", max)]);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut exp = expand("f{1...4}").unwrap();
        assert_eq!(exp.size_hint(), (4, Some(4)));
        exp.next();
        assert_eq!(exp.size_hint(), (3, Some(3)));
        assert_eq!(exp.remaining(), 3);
    }

    #[test]
    fn expansion_is_restartable() {
        let first = names("x{1...3}");
        let second = names("x{1...3}");
        assert_eq!(first, second);
    }
}
