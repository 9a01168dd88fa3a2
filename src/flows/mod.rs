//! Flows module - End-to-end runs
//!
//! This module provides:
//! - The counting run (scan, count, rank, report)

pub mod count;
