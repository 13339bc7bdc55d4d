//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Logging bootstrap and verbose console output
pub mod logging;

/// Input validation and parsing utilities
pub mod validation;
