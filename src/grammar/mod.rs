pub mod eliminate_left_recursion;
pub mod error;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub use eliminate_left_recursion::next_free_non_terminal;
pub use error::{GrammarError, Result};
pub use grammar::{Grammar, Production, Symbol};

/// Written form of the empty production.
pub const EPSILON: char = 'e';
