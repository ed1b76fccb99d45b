//! Per-model price table
//!
//! Prices are USD per 1000 tokens. The table is built once at startup
//! (built-in defaults plus config overrides) and never mutated afterwards.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in prices, in display order. The first entry is the default selection.
const DEFAULT_PRICES: &[(&str, f64)] = &[
    ("gpt-3.5-turbo", 0.0015),
    ("gpt-3.5-turbo-16k", 0.003),
    ("gpt-3.5-turbo-completion", 0.002),
    ("gpt-3.5-turbo-16k-completion", 0.004),
    ("gpt-4", 0.03),
    ("gpt-4-32k", 0.06),
    ("gpt-4-completion", 0.06),
    ("gpt-4-32k-completion", 0.12),
    ("text-davinci-003", 0.02),
    ("text-ada-001", 0.0004),
    ("ada", 0.0004),
    ("text-babbage-001", 0.0005),
    ("babbage", 0.0005),
    ("text-curie-001", 0.002),
    ("curie", 0.002),
    ("text-davinci-002", 0.02),
    ("code-davinci-002", 0.02),
    ("ada-finetuned", 0.0016),
    ("babbage-finetuned", 0.0024),
    ("curie-finetuned", 0.012),
    ("davinci-finetuned", 0.12),
];

/// One row of the table, as exposed to the UIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrice {
    pub model: String,
    pub price_per_1k: f64,
}

#[derive(Debug, Clone)]
pub struct PricingTable {
    models: Vec<String>,
    prices: HashMap<String, f64>,
}

impl PricingTable {
    /// Build a table from ordered `(model, price)` rows.
    ///
    /// A model listed twice keeps its first position and its last price.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self {
            models: Vec::new(),
            prices: HashMap::new(),
        };
        for (model, price) in rows {
            table.insert(model.into(), price)?;
        }
        Ok(table)
    }

    /// Apply overrides on top of this table: known models get a new price,
    /// unknown ones are appended to the model list.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        for (model, price) in overrides {
            self.insert(model.clone(), *price)?;
        }
        Ok(self)
    }

    fn insert(&mut self, model: String, price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidPrice { model, price });
        }
        if !self.prices.contains_key(&model) {
            self.models.push(model.clone());
        }
        self.prices.insert(model, price);
        Ok(())
    }

    /// Price per 1000 tokens; unknown models cost nothing.
    pub fn lookup(&self, model: &str) -> f64 {
        match self.prices.get(model) {
            Some(price) => *price,
            None => {
                tracing::debug!(model, "No price configured, using 0");
                0.0
            }
        }
    }

    pub fn contains(&self, model: &str) -> bool {
        self.prices.contains_key(model)
    }

    /// Model ids in display order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// First model in display order, used as the initial selection
    pub fn default_model(&self) -> Option<&str> {
        self.models.first().map(String::as_str)
    }

    pub fn rows(&self) -> Vec<ModelPrice> {
        self.models
            .iter()
            .map(|model| ModelPrice {
                model: model.clone(),
                price_per_1k: self.prices[model],
            })
            .collect()
    }

    /// `(token_count / 1000) * price`
    pub fn estimate_cost(&self, token_count: usize, model: &str) -> f64 {
        (token_count as f64 / 1000.0) * self.lookup(model)
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            models: DEFAULT_PRICES.iter().map(|(m, _)| m.to_string()).collect(),
            prices: DEFAULT_PRICES
                .iter()
                .map(|(m, p)| (m.to_string(), *p))
                .collect(),
        }
    }
}

/// Format a cost the way every UI shows it: dollars with 6 decimals
pub fn format_cost(cost: f64) -> String {
    format!("${:.6}", cost)
}
