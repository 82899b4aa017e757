//! Inline terminal menu UI.
//!
//! The UI is organized into three layers:
//!
//! - **[`selection`]** — cursor state machine and the paint/read loop
//! - **[`render`]** — stateless frame painting onto a [`Console`]
//! - **[`theme`]** — color pairs and color-name parsing
//!
//! The entry point for consumers is [`Menu::show`], which calls
//! [`selection::run_menu`].
//!
//! [`Console`]: crate::console::Console
//! [`Menu::show`]: crate::menu::Menu::show

pub mod render;
pub mod selection;
pub mod theme;

pub use selection::{MenuState, Selection, SelectionMachine};
pub use theme::{ColorPair, DEFAULT_COLORS};
