//! Backends module - Filesystem access
//!
//! This module provides:
//! - File discovery (single files, directories, optional recursion)

pub mod scan;
