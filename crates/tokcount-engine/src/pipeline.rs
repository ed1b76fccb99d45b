//! Derived-state pipeline: text + model in, breakdown out

use anyhow::Result;
use std::sync::Arc;
use tokcount_core::{Breakdown, Palette, PricingTable, TokenSpan};
use tokcount_tokens::{TiktokenTokenizer, Tokenizer};

/// Immutable bundle of tokenizer, prices and palette.
///
/// `compute` is a pure function of its arguments: same text and model,
/// same breakdown. It does no I/O and cannot fail.
pub struct Pipeline {
    tokenizer: Arc<dyn Tokenizer>,
    pricing: PricingTable,
    palette: Palette,
}

impl Pipeline {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, pricing: PricingTable, palette: Palette) -> Self {
        Self {
            tokenizer,
            pricing,
            palette,
        }
    }

    /// cl100k_base tokenizer with the given prices and the default palette
    pub fn with_pricing(pricing: PricingTable) -> Result<Self> {
        let tokenizer = TiktokenTokenizer::cl100k()?;
        Ok(Self::new(Arc::new(tokenizer), pricing, Palette::default()))
    }

    pub fn compute(&self, text: &str, model: &str) -> Breakdown {
        let encoding = self.tokenizer.encoding_name();
        if text.is_empty() {
            return Breakdown::empty(model, encoding);
        }

        let ids = self.tokenizer.encode(text);

        // One decode per token so each span maps to exactly one id
        let tokens: Vec<TokenSpan> = ids
            .iter()
            .enumerate()
            .map(|(index, id)| TokenSpan {
                index,
                id,
                text: self.tokenizer.decode(&[id]),
                color: self.palette.color_at(index),
            })
            .collect();

        let token_count = tokens.len();
        let cost = self.pricing.estimate_cost(token_count, model);
        let char_count = char_count(text);

        tracing::trace!(
            model,
            chars = char_count,
            tokens = token_count,
            cost,
            "Recomputed breakdown"
        );

        Breakdown {
            model: model.to_string(),
            encoding: encoding.to_string(),
            char_count,
            token_count,
            cost,
            tokens,
        }
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn encoding_name(&self) -> &str {
        self.tokenizer.encoding_name()
    }
}

/// Length in UTF-16 code units, the count a browser text field reports.
/// Characters outside the BMP count twice.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokcount_core::PaletteColor;
    use tokcount_tokens::{TokenId, TokenSequence};

    /// One token per char, id = code point. Makes counts exact in tests.
    pub(crate) struct CharTokenizer;

    impl Tokenizer for CharTokenizer {
        fn encoding_name(&self) -> &str {
            "chars"
        }

        fn encode(&self, text: &str) -> TokenSequence {
            text.chars().map(|c| c as TokenId).collect::<Vec<_>>().into()
        }

        fn decode(&self, ids: &[TokenId]) -> String {
            ids.iter().filter_map(|&id| char::from_u32(id)).collect()
        }
    }

    pub(crate) fn char_pipeline() -> Pipeline {
        Pipeline::new(
            Arc::new(CharTokenizer),
            PricingTable::default(),
            Palette::default(),
        )
    }

    #[test]
    fn test_empty_text() {
        let pipeline = char_pipeline();
        let breakdown = pipeline.compute("", "gpt-4");

        assert_eq!(breakdown.token_count, 0);
        assert_eq!(breakdown.char_count, 0);
        assert_eq!(breakdown.cost, 0.0);
        assert!(breakdown.tokens.is_empty());
    }

    #[test]
    fn test_cost_for_known_model() {
        let pipeline = char_pipeline();
        let text = "a".repeat(2000);
        let breakdown = pipeline.compute(&text, "gpt-3.5-turbo");

        assert_eq!(breakdown.token_count, 2000);
        assert!((breakdown.cost - 0.003).abs() < 1e-12);
        assert_eq!(breakdown.formatted_cost(), "$0.003000");
    }

    #[test]
    fn test_unknown_model_costs_nothing() {
        let pipeline = char_pipeline();
        let breakdown = pipeline.compute(&"x".repeat(5000), "not-a-model");

        assert_eq!(breakdown.token_count, 5000);
        assert_eq!(breakdown.cost, 0.0);
        assert_eq!(breakdown.model, "not-a-model");
    }

    #[test]
    fn test_colors_follow_position() {
        let pipeline = char_pipeline();
        let breakdown = pipeline.compute("aaaaaaaa", "gpt-4");
        let colors: Vec<PaletteColor> = breakdown.tokens.iter().map(|t| t.color).collect();

        // Identical tokens still get different colors
        assert_eq!(colors[0], PaletteColor::Blue);
        assert_eq!(colors[1], PaletteColor::Red);
        assert_eq!(colors[6], PaletteColor::Blue);
        assert_eq!(colors[7], PaletteColor::Red);
    }

    #[test]
    fn test_spans_are_ordered_and_reconstruct_text() {
        let pipeline = char_pipeline();
        let text = "héllo 🤚🏾";
        let breakdown = pipeline.compute(text, "ada");

        assert_eq!(breakdown.char_count, 9);
        assert!(breakdown.tokens.iter().enumerate().all(|(i, t)| t.index == i));
        assert_eq!(breakdown.reconstructed_text(), text);
    }

    #[test]
    fn test_char_count_uses_utf16_units() {
        let pipeline = char_pipeline();

        // Raised hand + skin tone modifier: two scalars, four UTF-16 units
        assert_eq!(pipeline.compute("🤚🏾", "gpt-4").char_count, 4);
        assert_eq!(pipeline.compute("héllo", "gpt-4").char_count, 5);
        assert_eq!(char_count(tokcount_core::EXAMPLE_TEXT), 187);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let pipeline = char_pipeline();
        let first = pipeline.compute("same input", "gpt-4");
        let second = pipeline.compute("same input", "gpt-4");
        assert_eq!(first, second);
    }
}
