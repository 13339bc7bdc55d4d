//! Business logic: the pagination engine and the catalog workflow built on it.

pub mod catalog;
pub mod models;
pub mod pagination;
pub mod repository;
