use anyhow::Result;
use tokcount_config::Config;
use tokcount_engine::Session;

use super::{build_pipeline, initial_model};

pub fn handle(config: &Config, model: Option<String>) -> Result<()> {
    let pipeline = build_pipeline(config)?;
    let mut session = Session::with_example(pipeline, config.example_text());

    if let Some(model) = initial_model(model, config) {
        session.select_model(model);
    }

    tokcount_tui::run(session)
}
