//! AI text generation services
//!
//! This module isolates the rest of the application from the remote
//! generative-language endpoint:
//! - [`client::TextGenerator`] is the transport seam (one prompt in, one
//!   completion out)
//! - [`client::GeminiClient`] is the production transport
//! - [`assistant::AiAssistant`] composes the domain prompts and applies the
//!   fallback policy

pub mod assistant;
pub mod client;

pub use assistant::{AiAssistant, DESCRIPTION_FALLBACK, TIPS_FALLBACK};
pub use client::{GeminiClient, GenerationError, TextGenerator};
