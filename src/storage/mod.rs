//! Storage layer for poke-pager
//!
//! Handles the TOML configuration file and the JSON Pokémon dataset.

use crate::error::StorageError;

pub mod config;
pub mod dataset;

type Result<T> = std::result::Result<T, StorageError>;
