//! Token breakdown engine: pipeline plus interactive session state

mod pipeline;
mod session;

pub use pipeline::{Pipeline, char_count};
pub use session::Session;
