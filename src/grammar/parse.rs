use std::collections::HashSet;

use tracing::warn;

use super::{Grammar, GrammarError, Production, Result};

impl Grammar {
    /// Reads one production line per non-terminal, `S -> Aa b | c`.
    ///
    /// A character counts as a non-terminal when it is uppercase or appears on
    /// the left of some line.
    pub fn parse(grammar: &str) -> Result<Self> {
        let mut g = Self::new();

        let mut raw_productions: Vec<(char, &str)> = Vec::new();

        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let invalid = || GrammarError::InvalidFormat {
                line: i + 1,
                content: line.trim().to_string(),
            };

            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() != 2 {
                return Err(invalid());
            }

            let left_str = parts[0].trim();
            let left = left_str.chars().next().ok_or_else(invalid)?;
            if left_str.chars().count() > 1 {
                warn!(line = i + 1, left = left_str, "left side truncated to {:?}", left);
            }

            raw_productions.push((left, parts[1]));
        }

        let declared: HashSet<char> = raw_productions.iter().map(|(left, _)| *left).collect();
        let is_non_terminal = |c: char| c.is_uppercase() || declared.contains(&c);

        for (left, rights) in raw_productions {
            let alternatives = rights
                .replace('|', " ")
                .split_whitespace()
                .map(|body| Production::parse_body(body, &is_non_terminal))
                .collect::<Vec<_>>();
            g.add_alternatives(left, alternatives);
        }

        Ok(g)
    }
}
