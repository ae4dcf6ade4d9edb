//! Splits an argument string into values keyed by prefix.
//!
//! `"/name Alex Yeo /tag a /tag b"` with prefixes `/name` and `/tag` yields
//! `/name -> ["Alex Yeo"]` and `/tag -> ["a", "b"]`. Text before the first
//! prefix is kept as the preamble.

use super::cli_syntax::Prefix;
use std::collections::HashMap;

/// Values found for each prefix, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Prefixes among `prefixes` that were given more than once.
    pub fn duplicated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect()
    }
}

/// Tokenize `args` against `prefixes`.
///
/// A prefix only counts when it starts the string or follows whitespace, and
/// is followed by whitespace or the end of input, so `/names` or `a/name` are
/// plain text.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| find_positions(args, *prefix).into_iter().map(move |i| (i, *prefix)))
        .collect();
    positions.sort_by_key(|(i, _)| *i);

    let preamble_end = positions.first().map_or(args.len(), |(i, _)| *i);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_positions(args: &str, prefix: Prefix) -> Vec<usize> {
    let needle = prefix.as_str();
    args.match_indices(needle)
        .map(|(i, _)| i)
        .filter(|&i| {
            let before_ok = args[..i].chars().next_back().map_or(true, char::is_whitespace);
            let after_ok = args[i + needle.len()..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);
            before_ok && after_ok
        })
        .collect()
}
