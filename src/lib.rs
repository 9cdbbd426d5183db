extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{Grammar, GrammarError};

fn error_to_json(e: GrammarError) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

#[wasm_bindgen]
pub fn eliminate_left_recursion_to_json(grammar: &str) -> String {
    match crate::Grammar::parse(grammar).and_then(|g| g.eliminate_left_recursion()) {
        Ok(g) => g.to_production_output_vec().to_json(),
        Err(e) => error_to_json(e),
    }
}

#[wasm_bindgen]
pub fn eliminate_left_recursion_to_plaintext(grammar: &str) -> String {
    match crate::Grammar::parse(grammar).and_then(|g| g.eliminate_left_recursion()) {
        Ok(g) => g.to_production_output_vec().to_plaintext(),
        Err(e) => error_to_json(e),
    }
}
