//! # Introduction
//!
//! conmenu draws a vertical menu in place on a character terminal, lets the user
//! move a highlight bar with the arrow keys and returns the id of the item chosen
//! with Enter. Items may carry a checkbox, in which case Enter flips the box
//! instead of ending the menu.
//!
//! ```no_run
//! use conmenu::{Menu, MenuItem};
//!
//! let mut menu = Menu::new().with_title("Pick one");
//! menu.set(1, MenuItem::new("Foo"));
//! menu.set(2, MenuItem::checkable("Bar", false));
//! menu.set(0, MenuItem::new("(separator)").disabled());
//! menu.set(3, MenuItem::new("Quit"));
//!
//! let selection = menu.show_in_terminal(true)?;
//! println!("chose {}", selection.id());
//! # Ok::<(), conmenu::MenuError>(())
//! ```
//!
//! ## Layout
//!
//! 1. [`menu`] — items, the ordered item store and error types.
//! 2. [`console`] — the [`console::Console`] terminal boundary, a crossterm
//!    implementation and a [`console::MockConsole`] for tests.
//! 3. [`ui`] — frame rendering and the selection state machine.

pub mod console;
pub mod menu;
pub mod ui;

pub use console::{Console, CrosstermConsole, MenuKey, MockConsole};
pub use menu::{CheckState, ItemId, Menu, MenuError, MenuItem, Result};
pub use ui::{ColorPair, MenuState, Selection};
