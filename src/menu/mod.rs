//! Menu data model
//!
//! - [`item`]: a single entry ([`MenuItem`]) and its checkbox state
//! - [`store`]: the ordered [`Menu`] with upsert-by-id semantics
//! - [`errors`]: [`MenuError`] and the crate `Result` alias

pub mod errors;
pub mod item;
pub mod store;

pub use errors::{MenuError, Result};
pub use item::{CheckState, ItemId, MenuItem};
pub use store::Menu;
