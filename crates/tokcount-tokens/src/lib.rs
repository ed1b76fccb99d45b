//! Tokenizer adapter over tiktoken
//!
//! The rest of the workspace only sees the [`Tokenizer`] trait. Encoding is
//! total: every string maps to a (possibly empty) [`TokenSequence`], so
//! callers never guard against a missing result.

use std::sync::Arc;
use thiserror::Error;
use tiktoken_rs::CoreBPE;

/// Integer id of one token in the vocabulary
pub type TokenId = u32;

/// Shown in place of a token whose bytes are not valid UTF-8 on their own
pub const REPLACEMENT: &str = "\u{FFFD}";

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Failed to load {encoding} vocabulary: {reason}")]
    Load { encoding: String, reason: String },
}

/// Ordered token ids produced by one encode call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<TokenId>);

impl TokenSequence {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<TokenId>> for TokenSequence {
    fn from(ids: Vec<TokenId>) -> Self {
        Self(ids)
    }
}

/// Encode/decode capability bound to one fixed vocabulary
pub trait Tokenizer: Send + Sync {
    /// Name of the vocabulary (e.g. `cl100k_base`)
    fn encoding_name(&self) -> &str;

    fn encode(&self, text: &str) -> TokenSequence;

    fn decode(&self, ids: &[TokenId]) -> String;

    /// Token count for a single string
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

/// Production tokenizer using the cl100k_base encoding (GPT-4, GPT-3.5-turbo)
#[derive(Clone)]
pub struct TiktokenTokenizer {
    bpe: Arc<CoreBPE>,
    encoding: &'static str,
}

impl TiktokenTokenizer {
    pub fn cl100k() -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::Load {
            encoding: "cl100k_base".to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Loaded cl100k_base vocabulary");

        Ok(Self {
            bpe: Arc::new(bpe),
            encoding: "cl100k_base",
        })
    }

    fn decode_one(&self, id: TokenId) -> String {
        self.bpe
            .decode(vec![id])
            .unwrap_or_else(|_| REPLACEMENT.to_string())
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encoding_name(&self) -> &str {
        self.encoding
    }

    fn encode(&self, text: &str) -> TokenSequence {
        if text.is_empty() {
            return TokenSequence::empty();
        }
        // Special-token markers are encoded as plain text so encode stays total
        TokenSequence(self.bpe.encode_ordinary(text))
    }

    fn decode(&self, ids: &[TokenId]) -> String {
        match self.bpe.decode(ids.to_vec()) {
            Ok(text) => text,
            // A sequence cut through a multi-byte character; fall back per token
            Err(_) => ids.iter().map(|&id| self.decode_one(id)).collect(),
        }
    }
}
