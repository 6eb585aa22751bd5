//! Shared CLI infrastructure for the IDS studio binary.

pub mod logging;
