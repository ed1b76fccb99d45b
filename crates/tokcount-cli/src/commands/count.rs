use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tokcount_config::Config;
use tokcount_core::{Breakdown, PricingTable};

use super::{build_pipeline, initial_model};

pub fn handle(
    config: &Config,
    text: Option<String>,
    file: Option<PathBuf>,
    model: Option<String>,
    tokens: bool,
    json: bool,
) -> Result<()> {
    let input = read_input(text, file.as_deref())?;
    let pipeline = build_pipeline(config)?;

    let model = initial_model(model, config)
        .or_else(|| pipeline.pricing().default_model().map(String::from))
        .unwrap_or_default();

    let breakdown = pipeline.compute(&input, &model);
    tracing::debug!(
        model = %model,
        tokens = breakdown.token_count,
        "Counted input"
    );

    if json {
        println!("{}", breakdown.to_json_pretty()?);
        return Ok(());
    }

    print!("{}", render_summary(&breakdown, pipeline.pricing()));
    if tokens && !breakdown.tokens.is_empty() {
        println!();
        println!("{}", render_tokens(&breakdown));
    }

    Ok(())
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn render_summary(breakdown: &Breakdown, pricing: &PricingTable) -> String {
    let price = if pricing.contains(&breakdown.model) {
        format!(
            "{} at ${} / 1K tokens",
            breakdown.model,
            pricing.lookup(&breakdown.model)
        )
    } else {
        format!("{} has no price configured", breakdown.model)
    };

    format!(
        "Characters:  {}\nTokens:      {}\nCost:        {}  ({})\nEncoding:    {}\n",
        breakdown.char_count,
        breakdown.token_count,
        breakdown.formatted_cost(),
        price,
        breakdown.encoding,
    )
}

/// Tokens with their palette color as ANSI background
fn render_tokens(breakdown: &Breakdown) -> String {
    breakdown
        .tokens
        .iter()
        .map(|token| {
            let (r, g, b) = token.color.rgb();
            token
                .text
                .as_str()
                .on(Color::Rgb { r, g, b })
                .with(Color::Black)
                .to_string()
        })
        .collect()
}
