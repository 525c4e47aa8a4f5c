//! An abstraction layer for chat-completion backends.
//!
//! This crate establishes an unified protocol for the screening
//! assistant to talk to an inference service, so that the rest of the
//! workspace can swap backends (or substitute a scripted one in tests)
//! without modifying the conversational core.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
