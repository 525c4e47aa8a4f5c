//! Core logic for the TalentScout screening assistant: the transcript,
//! the candidate record, and the linear screening conversation.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod exit;
pub mod fields;
mod model_client;
mod prompts;
mod questions;
pub mod session;
pub mod transcript;

pub use model_client::ModelClient;
pub use prompts::{closing_message, greeting_message};
pub use session::{ScreeningSession, Step};
