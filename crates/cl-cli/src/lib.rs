//! CLI library components for the location selector.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod render;
