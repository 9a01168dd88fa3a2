//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run options and the fatal error taxonomy
//! - Pattern resolution and token extraction
//! - File reading strategies
//! - Frequency accumulation, ranking and rendering
//! - The run-wide deadline and diagnostics setup

pub mod deadline;
pub mod extract;
pub mod file_reader;
pub mod frequency;
pub mod logging;
pub mod model;
pub mod paths;
pub mod pattern;
pub mod rank;
pub mod render;
