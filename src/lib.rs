//! Khidma API
//!
//! This crate provides a bilingual (Arabic/French) job-board API service for
//! the Algerian market, with AI-assisted text generation for job postings and
//! profile advice.
//!
//! # Modules
//! - `controller`: Handles HTTP requests and routes
//! - `entities`: Defines core data structures (jobs, users)
//! - `error`: Provides error handling and custom error types
//! - `routes`: Defines API endpoints and routing
//! - `service`: Implements business logic (AI text facade, job catalog)
//! - `utils`: Contains configuration and startup helpers

rust_i18n::i18n!("locales", fallback = "en");

pub mod controller;
pub mod entities;
pub mod error;
pub mod locales;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod utils;

pub use entities::*;
pub use error::*;
pub use locales::Locales;
pub use routes::*;
pub use utils::*;
