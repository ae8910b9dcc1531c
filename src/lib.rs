//! toolroute - natural-language to structured-action routing
//!
//! Forwards a free-text request to an OpenAI-compatible chat-completions
//! endpoint together with a fixed catalog of strict tool schemas, forces tool
//! use, and returns the one tool call the model selected.

pub mod error;
pub mod llm;
pub mod router;
pub mod server;
pub mod tools;

pub use error::{Result, RouterError};
pub use router::{RouteDecision, Router};
