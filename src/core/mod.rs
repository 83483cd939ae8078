//! Core library components.
//!
//! Recipient resolution, encryption, the mirror layout and the sync engine.
//! Nothing here parses arguments or prints for the user.

pub mod cipher;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod diff;
pub mod engine;
pub mod forge;
pub mod freshness;
pub mod git;
pub mod mirror;
pub mod project;
pub mod recipients;
