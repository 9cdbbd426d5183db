use crowbook_text_processing::escape;
use serde::Serialize;

use super::{
    grammar::{Production, Symbol},
    Grammar,
};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: char,
    #[serde(serialize_with = "serialize_rights")]
    pub rights: &'a [Production],
}

fn serialize_rights<S: serde::Serializer>(
    rights: &&[Production],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(rights.iter().map(|p| p.to_string()))
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        format!(
            "{} -> {}",
            self.left,
            self.rights
                .iter()
                .map(|right| right.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }

    pub fn to_latex(&self, and_sign: bool) -> String {
        let left = if and_sign {
            format!("{} & \\rightarrow &", escape::tex(self.left.to_string()))
        } else {
            format!("{} \\rightarrow ", escape::tex(self.left.to_string()))
        };
        let right = self
            .rights
            .iter()
            .map(|right| {
                right
                    .symbols()
                    .iter()
                    .map(|s| match s {
                        Symbol::Epsilon => "\\epsilon".to_string(),
                        _ => escape::tex(s.to_string()).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" \\ ")
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");

        left + &right
    }
}

#[derive(Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        self.productions
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|s| s.to_latex(true)))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Grammar {
    pub fn to_production_output_vec(&self) -> ProductionOutputVec {
        let productions = self
            .non_terminal_iter()
            .map(|(left, rights)| ProductionOutput { left, rights })
            .collect();
        ProductionOutputVec { productions }
    }
}

#[cfg(test)]
mod tests {
    use crate::Grammar;

    #[test]
    fn plaintext_lists_alternatives_on_one_line() {
        let g = Grammar::parse("S -> Sa | b\nA -> c").unwrap();
        assert_eq!(
            g.to_production_output_vec().to_plaintext(),
            "S -> Sa b\nA -> c"
        );
    }

    #[test]
    fn latex_writes_epsilon() {
        let g = Grammar::parse("Z -> aZ e").unwrap();
        assert_eq!(
            g.to_production_output_vec().to_latex(),
            "\\[\\begin{array}{cll}\\\\\nZ & \\rightarrow &a \\ Z \\mid \\epsilon\\\\\n\\end{array}\\]"
        );
    }

    #[test]
    fn json_keeps_order() {
        let g = Grammar::parse("S -> bZ\nZ -> aZ e").unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&g.to_production_output_vec().to_json()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "productions": [
                    { "left": "S", "rights": ["bZ"] },
                    { "left": "Z", "rights": ["aZ", "e"] },
                ]
            })
        );
    }
}
