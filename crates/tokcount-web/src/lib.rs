//! Web UI: the single-page tokenizer plus a small JSON API

pub mod page;
pub mod server;

pub use server::{TokenizeRequest, WebServer};
