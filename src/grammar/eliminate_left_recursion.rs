use tracing::{debug, warn};

use super::{
    grammar::{Production, Symbol},
    Grammar, GrammarError, Result,
};

/// Names tried, in order, for the helper non-terminal of each split.
/// `A` and `S` are left out, they usually name the start symbol.
const FRESH_NON_TERMINALS: [char; 24] = [
    'Z', 'Y', 'X', 'W', 'V', 'U', 'T', 'R', 'Q', 'P', 'O', 'N', 'M', 'L', 'K', 'J', 'I', 'H', 'G',
    'F', 'E', 'D', 'C', 'B',
];

/// First name of the pool (`Z` down to `B`) that `grammar` does not use as a
/// non-terminal yet.
pub fn next_free_non_terminal(grammar: &Grammar) -> Result<char> {
    FRESH_NON_TERMINALS
        .iter()
        .copied()
        .find(|&c| !grammar.contains_non_terminal(c))
        .ok_or(GrammarError::ResourceExhausted)
}

impl Grammar {
    /// Returns an equivalent grammar without direct or indirect left recursion.
    ///
    /// Non-terminals are handled in insertion order; each one first gets every
    /// earlier non-terminal substituted into its leading position, then its
    /// immediate recursion is split off into a fresh non-terminal appended at
    /// the end. `self` is left untouched.
    pub fn eliminate_left_recursion(&self) -> Result<Grammar> {
        let mut g = self.clone();
        let non_terminals = g.ordered_non_terminals();

        for (i, &ai) in non_terminals.iter().enumerate() {
            for &aj in &non_terminals[..i] {
                g.substitute_leading(ai, aj);
            }
            g.eliminate_immediate_left_recursion(ai)?;
        }

        Ok(g)
    }

    /// Replaces every `ai -> aj γ` by `ai -> δ γ` for each `aj -> δ`, in place.
    fn substitute_leading(&mut self, ai: char, aj: char) {
        let replacements = self.productions_of(aj);
        let mut substituted = 0;
        let productions = self
            .productions_of(ai)
            .iter()
            .flat_map(|production| {
                if production.starts_with_non_terminal(aj) {
                    substituted += 1;
                    replacements
                        .iter()
                        .map(|delta| concat(delta.symbols(), production.tail()))
                        .collect::<Vec<_>>()
                } else {
                    vec![production.clone()]
                }
            })
            .collect::<Vec<_>>();

        if substituted > 0 {
            debug!(%ai, %aj, substituted, "substituted leading non-terminal");
        }
        self.replace_productions(ai, productions);
    }

    fn eliminate_immediate_left_recursion(&mut self, a: char) -> Result<()> {
        let (recursive, others): (Vec<&Production>, Vec<&Production>) = self
            .productions_of(a)
            .iter()
            .partition(|p| p.starts_with_non_terminal(a));

        if recursive.is_empty() {
            return Ok(());
        }

        let a_prime = next_free_non_terminal(self)?;
        let tail = [Symbol::NonTerminal(a_prime)];

        let betas: Vec<Production> = others
            .into_iter()
            .map(|beta| concat(beta.symbols(), &tail))
            .collect();
        let alphas: Vec<Production> = recursive
            .into_iter()
            .map(|alpha| concat(alpha.tail(), &tail))
            .chain(std::iter::once(Production::epsilon()))
            .collect();

        debug!(
            %a,
            %a_prime,
            alphas = alphas.len() - 1,
            betas = betas.len(),
            "split immediate left recursion"
        );
        if betas.is_empty() {
            warn!(%a, "non-terminal has no alternative left after removing its left recursion");
        }

        self.replace_productions(a, betas);
        self.add_alternatives(a_prime, alphas);
        Ok(())
    }
}

fn concat(head: &[Symbol], tail: &[Symbol]) -> Production {
    head.iter().chain(tail).copied().collect()
}
