//! Core module - The numeric-token model behind sequence detection
//!
//! This module provides:
//! - Frame-time parsing with graceful degradation (parse)
//! - Numeric-run extraction from filename strings (scan)
//! - The ordered token vector and its comparisons (numbers)

pub mod numbers;
pub mod parse;
pub mod scan;
