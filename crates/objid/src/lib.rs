//! Content-derived object identifiers for content-addressed stores.
//!
//! This crate provides the 128-bit `ObjectId` type, the streaming
//! `HashBuilder` that computes ids from content, a strict lowercase hex
//! codec, and id-keyed collections.

mod error;
pub mod hex;
mod id;
pub mod hasher;
pub mod collections;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::ObjectIdError;
pub use hasher::HashBuilder;
pub use id::ObjectId;
