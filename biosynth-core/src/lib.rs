//! Shared primitives for the biosynth workspace.
//!
//! `biosynth-core` holds the pieces every other crate leans on:
//!
//! - **Error types**: [`BiosynthError`] and [`Result`]
//! - **Traits**: [`Sequence`], [`ContentAddressable`], [`Summarizable`]
//! - **Hashing**: SHA-256 digests used to fingerprint sequences

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{BiosynthError, Result};
pub use traits::*;
