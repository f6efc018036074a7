//! JSON document storage
//!
//! This module handles the flat-file JSON documents backing the catalog and
//! the repositories over them.

pub mod document;
pub mod repositories;

pub use document::JsonStore;
