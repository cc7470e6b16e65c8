//! Shared helpers that do not belong to one layer.

pub mod testing;
