//! Render model produced by one pipeline computation

use crate::palette::PaletteColor;
use crate::pricing::format_cost;
use crate::Result;
use serde::{Deserialize, Serialize};

/// One token of the breakdown, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub index: usize,
    pub id: u32,
    pub text: String,
    pub color: PaletteColor,
}

/// Everything a view needs to render the current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub model: String,
    pub encoding: String,
    pub char_count: usize,
    pub token_count: usize,
    pub cost: f64,
    pub tokens: Vec<TokenSpan>,
}

impl Breakdown {
    pub fn empty(model: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            encoding: encoding.into(),
            char_count: 0,
            token_count: 0,
            cost: 0.0,
            tokens: Vec::new(),
        }
    }

    pub fn formatted_cost(&self) -> String {
        format_cost(self.cost)
    }

    /// Concatenation of all decoded token texts
    pub fn reconstructed_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
