//! Candidate pool model and range expansion.
//!
//! A pool specification is a comma-separated list of tokens. Each token is
//! either a literal value or a `prefix[start..end]suffix` range that expands
//! to one value per number. The pool keeps insertion order and collapses
//! duplicates, so selection can scan it deterministically.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `prefix[start..end]suffix`. The prefix is greedy, so a token
/// carrying several bracketed ranges expands only the last one; everything
/// before it is literal prefix text.
fn range_token() -> &'static Regex {
    static RANGE_TOKEN: OnceLock<Regex> = OnceLock::new();
    RANGE_TOKEN.get_or_init(|| {
        Regex::new(r"(.+)\[(\d+)\.\.(\d+)\](.*)").expect("range token pattern is valid")
    })
}

/// Ordered, deduplicated set of values eligible for allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePool {
    values: Vec<String>,
}

impl CandidatePool {
    /// Parse a pool specification into an ordered pool.
    ///
    /// Tokens are split on commas and trimmed; blank tokens are dropped, so
    /// empty input yields an empty pool. A token matching
    /// `prefix[start..end]suffix` expands one value per number, ascending
    /// when `start <= end` and descending otherwise, bounds inclusive. Any
    /// other token is kept verbatim. Duplicates keep their first position.
    pub fn parse(text: &str) -> Self {
        let mut values = Vec::new();
        let mut seen = HashSet::new();
        let mut push = |value: String| {
            if seen.insert(value.clone()) {
                values.push(value);
            }
        };

        for token in text.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match split_range(token) {
                Some((prefix, start, end, suffix)) => {
                    if start > end {
                        for i in (end..=start).rev() {
                            push(format!("{prefix}{i}{suffix}"));
                        }
                    } else {
                        for i in start..=end {
                            push(format!("{prefix}{i}{suffix}"));
                        }
                    }
                }
                None => push(token.to_string()),
            }
        }

        Self { values }
    }

    /// Values in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Number of values in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Clone the values out in pool order, for reports and error messages.
    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }
}

impl fmt::Display for CandidatePool {
    /// Comma-and-space joined rendering, in pool order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.values.join(", "))
    }
}

/// Split a token into (prefix, start, end, suffix) if it carries a range.
///
/// Bounds that do not fit in a `u64` leave the token literal.
fn split_range(token: &str) -> Option<(&str, u64, u64, &str)> {
    let caps = range_token().captures(token)?;
    let prefix = caps.get(1)?.as_str();
    let start = caps.get(2)?.as_str().parse().ok()?;
    let end = caps.get(3)?.as_str().parse().ok()?;
    let suffix = caps.get(4)?.as_str();
    Some((prefix, start, end, suffix))
}
