//! Core message catalog reader module

pub mod models;
pub mod error;
mod catalog;
mod header;
mod metadata;
mod strings;

pub use catalog::MoCatalog;
pub use error::{MoError, Result};
