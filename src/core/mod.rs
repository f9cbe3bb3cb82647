//! Core components shared by both collectors.
//!
//! - The main [`MentionsClient`] and its builder.
//! - The primary [`MentionsError`] type.
//! - The normalized [`Mention`] record and its batch/warning wrappers.

/// The main client (`MentionsClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`MentionsError`) for the crate.
pub mod error;
/// The normalized mention record and collector result types.
pub mod models;

// convenient re-exports so most code can just `use crate::core::MentionsClient`
pub use client::{MentionsClient, MentionsClientBuilder};
pub use error::MentionsError;
pub use models::{Mention, MentionBatch, MentionSource, SourceWarning};
