//! Error types for menu construction and display
//!
//! Only lookups can fail in the data sense. An empty menu, or one whose items are
//! all disabled, is a normal outcome of a run rather than an error. Terminal I/O
//! failures are fatal: the menu cannot be shown without a working terminal.

use super::item::ItemId;
use std::io;
use thiserror::Error;

/// Errors raised by the menu API
#[derive(Debug, Error)]
pub enum MenuError {
    /// No item carries the requested id
    #[error("no menu item with id {id}")]
    NotFound { id: ItemId },

    /// A color name could not be parsed
    #[error("unknown color '{name}'")]
    UnknownColor { name: String },

    /// The terminal failed while painting or reading a key
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
