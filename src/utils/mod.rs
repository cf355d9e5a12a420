// src/utils/mod.rs
mod runs;

pub use runs::*;
