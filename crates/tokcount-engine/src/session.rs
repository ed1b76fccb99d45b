//! Interactive session state
//!
//! A session owns the only two mutable values in the system, the input
//! text and the selected model. Every transition recomputes the breakdown
//! before returning, so a view never observes stale derived state.

use crate::Pipeline;
use std::sync::Arc;
use tokcount_core::{Breakdown, EXAMPLE_TEXT};

pub struct Session {
    pipeline: Arc<Pipeline>,
    example_text: String,
    input_text: String,
    selected_model: String,
    breakdown: Breakdown,
}

impl Session {
    /// Start with the built-in example text and the first listed model
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self::with_example(pipeline, EXAMPLE_TEXT)
    }

    pub fn with_example(pipeline: Arc<Pipeline>, example_text: impl Into<String>) -> Self {
        let example_text = example_text.into();
        let selected_model = pipeline
            .pricing()
            .default_model()
            .unwrap_or_default()
            .to_string();
        let breakdown = pipeline.compute(&example_text, &selected_model);

        Self {
            pipeline,
            input_text: example_text.clone(),
            example_text,
            selected_model,
            breakdown,
        }
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.recompute();
    }

    pub fn select_model(&mut self, model: impl Into<String>) {
        self.selected_model = model.into();
        self.recompute();
    }

    pub fn load_example(&mut self) {
        self.input_text = self.example_text.clone();
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.input_text.clear();
        self.recompute();
    }

    pub fn push_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.input_text);
        text.push(c);
        self.edit(text);
    }

    pub fn newline(&mut self) {
        self.push_char('\n');
    }

    pub fn backspace(&mut self) {
        let mut text = std::mem::take(&mut self.input_text);
        text.pop();
        self.edit(text);
    }

    /// Select the model after the current one, wrapping around
    pub fn next_model(&mut self) {
        if let Some(model) = self.neighbour_model(1) {
            self.select_model(model);
        }
    }

    /// Select the model before the current one, wrapping around
    pub fn previous_model(&mut self) {
        if let Some(model) = self.neighbour_model(-1) {
            self.select_model(model);
        }
    }

    fn neighbour_model(&self, step: isize) -> Option<String> {
        let models = self.pipeline.pricing().models();
        if models.is_empty() {
            return None;
        }

        // A model outside the list jumps back to the first entry
        let next = match models.iter().position(|m| *m == self.selected_model) {
            Some(pos) => (pos as isize + step).rem_euclid(models.len() as isize) as usize,
            None => 0,
        };
        Some(models[next].clone())
    }

    fn recompute(&mut self) {
        self.breakdown = self
            .pipeline
            .compute(&self.input_text, &self.selected_model);
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn example_text(&self) -> &str {
        &self.example_text
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}
