use std::collections::HashMap;
use std::fmt;

use super::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerminal(char),
    Terminal(char),
    Epsilon,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::NonTerminal(c) | Symbol::Terminal(c) => *c,
            Symbol::Epsilon => EPSILON,
        }
    }

    pub fn is_non_terminal(&self, name: char) -> bool {
        matches!(self, Symbol::NonTerminal(c) if *c == name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One alternative of a non-terminal, e.g. `Aab` is `[A, a, b]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Production(pub Vec<Symbol>);

impl Production {
    pub fn epsilon() -> Self {
        Production(vec![Symbol::Epsilon])
    }

    /// Reads a body token. The token `e` on its own is the empty production;
    /// otherwise every character is a symbol, classified by `is_non_terminal`.
    pub fn parse_body(body: &str, is_non_terminal: impl Fn(char) -> bool) -> Self {
        if body.len() == 1 && body.starts_with(EPSILON) {
            return Self::epsilon();
        }
        Production(
            body.chars()
                .map(|c| {
                    if is_non_terminal(c) {
                        Symbol::NonTerminal(c)
                    } else {
                        Symbol::Terminal(c)
                    }
                })
                .collect(),
        )
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn first(&self) -> Option<&Symbol> {
        self.0.first()
    }

    pub fn starts_with_non_terminal(&self, name: char) -> bool {
        self.first().map_or(false, |s| s.is_non_terminal(name))
    }

    /// Everything after the leading symbol.
    pub fn tail(&self) -> &[Symbol] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn is_epsilon(&self) -> bool {
        self.0 == [Symbol::Epsilon]
    }
}

impl From<&str> for Production {
    /// Uppercase letters are non-terminals.
    fn from(body: &str) -> Self {
        Production::parse_body(body, char::is_uppercase)
    }
}

impl FromIterator<Symbol> for Production {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Production(iter.into_iter().collect())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

/// Non-terminals in first-seen order together with their alternatives.
///
/// `non_terminals` and the keys of `productions` always name the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    non_terminals: Vec<char>,
    productions: HashMap<char, Vec<Production>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.non_terminals.is_empty()
    }

    fn entry(&mut self, non_terminal: char) -> &mut Vec<Production> {
        if !self.productions.contains_key(&non_terminal) {
            self.non_terminals.push(non_terminal);
        }
        self.productions.entry(non_terminal).or_default()
    }

    pub fn add_alternatives<I>(&mut self, non_terminal: char, alternatives: I)
    where
        I: IntoIterator<Item = Production>,
    {
        self.entry(non_terminal).extend(alternatives);
    }

    pub fn productions_of(&self, non_terminal: char) -> &[Production] {
        self.productions
            .get(&non_terminal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Overwrites the alternatives of `non_terminal`, registering it if needed.
    pub fn replace_productions(&mut self, non_terminal: char, alternatives: Vec<Production>) {
        *self.entry(non_terminal) = alternatives;
    }

    pub fn contains_non_terminal(&self, symbol: char) -> bool {
        self.productions.contains_key(&symbol)
    }

    pub fn ordered_non_terminals(&self) -> Vec<char> {
        self.non_terminals.clone()
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = (char, &[Production])> {
        self.non_terminals
            .iter()
            .map(move |&nt| (nt, self.productions_of(nt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternatives(bodies: &[&str]) -> Vec<Production> {
        bodies.iter().map(|&b| Production::from(b)).collect()
    }

    #[test]
    fn add_alternatives_appends_in_order() {
        let mut g = Grammar::new();
        g.add_alternatives('S', alternatives(&["Aa", "b"]));
        g.add_alternatives('A', alternatives(&["c"]));
        g.add_alternatives('S', alternatives(&["d"]));

        assert_eq!(g.ordered_non_terminals(), vec!['S', 'A']);
        assert_eq!(g.productions_of('S'), alternatives(&["Aa", "b", "d"]).as_slice());
    }

    #[test]
    fn unknown_non_terminal_has_no_productions() {
        let g = Grammar::new();
        assert!(g.productions_of('Q').is_empty());
        assert!(!g.contains_non_terminal('Q'));
    }

    #[test]
    fn replace_productions_keeps_order_in_step() {
        let mut g = Grammar::new();
        g.add_alternatives('S', alternatives(&["a"]));
        g.replace_productions('T', alternatives(&["b"]));
        g.replace_productions('S', Vec::new());

        assert_eq!(g.ordered_non_terminals(), vec!['S', 'T']);
        assert!(g.productions_of('S').is_empty());
        assert!(g.contains_non_terminal('S'));
    }

    #[test]
    fn ordered_non_terminals_is_a_copy() {
        let mut g = Grammar::new();
        g.add_alternatives('S', alternatives(&["a"]));
        let mut order = g.ordered_non_terminals();
        order.push('X');
        order.reverse();

        assert_eq!(g.ordered_non_terminals(), vec!['S']);
    }

    #[test]
    fn clone_shares_nothing() {
        let mut g = Grammar::new();
        g.add_alternatives('S', alternatives(&["a"]));
        let mut c = g.clone();
        c.add_alternatives('S', alternatives(&["b"]));
        c.add_alternatives('T', alternatives(&["c"]));

        assert_eq!(g.ordered_non_terminals(), vec!['S']);
        assert_eq!(g.productions_of('S'), alternatives(&["a"]).as_slice());
    }

    #[test]
    fn body_classification() {
        assert!(Production::from("e").is_epsilon());
        assert_eq!(
            Production::from("Aeb").symbols(),
            &[
                Symbol::NonTerminal('A'),
                Symbol::Terminal('e'),
                Symbol::Terminal('b')
            ]
        );
        assert_eq!(Production::from("Aeb").to_string(), "Aeb");
        assert_eq!(Production::from("Aeb").tail(), &Production::from("eb").0[..]);
    }
}
