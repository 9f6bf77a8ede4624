//! Pouch Core - Shared types library.
//!
//! This crate provides common types used across all Pouch components:
//! - `server` - API server exposing the typed query/mutation surface
//! - `integration-tests` - Workspace-level integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe surrogate-key IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
