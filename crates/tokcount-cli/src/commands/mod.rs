pub mod completions;
pub mod count;
pub mod init;
pub mod models;
pub mod ui;
pub mod web;

use anyhow::Result;
use std::sync::Arc;
use tokcount_config::Config;
use tokcount_engine::Pipeline;

/// Tokenizer plus the configured price table
pub fn build_pipeline(config: &Config) -> Result<Arc<Pipeline>> {
    let pricing = config.pricing_table()?;
    Ok(Arc::new(Pipeline::with_pricing(pricing)?))
}

/// Flag, then config default; `None` leaves the first listed model
pub fn initial_model(flag: Option<String>, config: &Config) -> Option<String> {
    flag.or_else(|| config.default_model.clone())
}
