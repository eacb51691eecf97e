//! Core types and definitions for the shooting-gallery session.
//!
//! This crate defines the vocabulary shared between the session engine and
//! any presentation layer: zones, commands, events, snapshots, errors, and
//! constants. It holds no RNG and no game logic.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod zones;

#[cfg(test)]
mod tests;
