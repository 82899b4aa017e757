//! Selection state machine and the interactive run loop
//!
//! [`SelectionMachine`] owns the highlighted index and interprets keys; it has no
//! I/O of its own. [`run_menu`] drives it: paint a frame, block for one key,
//! update, repeat until an item is committed.
//!
//! # States
//!
//! ```text
//! Idle ──start──▶ Empty                      (no items, or none enabled)
//!   │
//!   └──start──▶ AwaitingInput ──Enter on checkable──▶ Toggling ──▶ AwaitingInput
//!                    │  ▲
//!                    │  └── Up / Down / other keys
//!                    └──Enter on plain item──▶ Committed
//! ```
//!
//! The cursor only ever rests on enabled items: entry skips forward to the first
//! enabled item, and Up/Down keep stepping (with wrap-around) past disabled ones.

use crate::console::{Console, MenuKey};
use crate::menu::errors::Result;
use crate::menu::item::{ItemId, MenuItem};
use crate::menu::store::Menu;
use crate::ui::render::{clear_menu, frame_rows, render_menu, MenuRenderData};
use tracing::{debug, trace};

/// Where the machine is in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Not started yet
    Idle,
    /// Frame painted, waiting for the next key
    AwaitingInput,
    /// A checkbox was just flipped; the next frame shows it
    Toggling,
    /// A plain item was chosen (terminal)
    Committed,
    /// Nothing can be chosen (terminal)
    Empty,
}

impl MenuState {
    pub fn is_terminal(self) -> bool {
        matches!(self, MenuState::Committed | MenuState::Empty)
    }
}

/// Outcome of showing a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user committed the item at `index`
    Chosen { id: ItemId, index: usize },
    /// The menu had no selectable items
    Nothing,
}

impl Selection {
    /// Chosen id, or 0 when nothing was chosen
    pub fn id(self) -> ItemId {
        match self {
            Selection::Chosen { id, .. } => id,
            Selection::Nothing => 0,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Chosen { index, .. } => Some(index),
            Selection::Nothing => None,
        }
    }

    pub fn is_chosen(self) -> bool {
        matches!(self, Selection::Chosen { .. })
    }
}

/// Cursor and state of one run
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    active: usize,
    state: MenuState,
}

impl SelectionMachine {
    pub fn new() -> Self {
        SelectionMachine {
            active: 0,
            state: MenuState::Idle,
        }
    }

    /// Highlighted item index
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Enter the machine: `Empty` if nothing is enabled, otherwise
    /// `AwaitingInput` with the cursor on the first enabled item.
    pub fn start(&mut self, items: &[MenuItem]) -> MenuState {
        self.state = match items.iter().position(|item| item.enabled) {
            Some(first) => {
                self.active = first;
                MenuState::AwaitingInput
            }
            None => {
                self.active = 0;
                MenuState::Empty
            }
        };
        self.state
    }

    /// Mark the frame as repainted after a toggle
    pub fn await_input(&mut self) {
        if self.state == MenuState::Toggling {
            self.state = MenuState::AwaitingInput;
        }
    }

    /// Apply one key. Only valid while awaiting input; terminal states ignore keys.
    pub fn handle_key(&mut self, key: MenuKey, items: &mut [MenuItem]) -> MenuState {
        if self.state.is_terminal() || self.state == MenuState::Idle {
            return self.state;
        }
        self.state = MenuState::AwaitingInput;

        match key {
            MenuKey::Up => self.active = step_up(items, self.active),
            MenuKey::Down => self.active = step_down(items, self.active),
            MenuKey::Enter => {
                let item = &mut items[self.active];
                match item.check.toggle() {
                    Some(checked) => {
                        debug!(id = item.id, checked, "menu item toggled");
                        self.state = MenuState::Toggling;
                    }
                    None => self.state = MenuState::Committed,
                }
            }
            MenuKey::Other => {}
        }
        self.state
    }
}

impl Default for SelectionMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Previous enabled index, wrapping from the top to the bottom
fn step_up(items: &[MenuItem], from: usize) -> usize {
    let count = items.len();
    let mut index = from;
    for _ in 0..count {
        index = if index == 0 { count - 1 } else { index - 1 };
        if items[index].enabled {
            return index;
        }
    }
    from
}

/// Next enabled index, wrapping from the bottom to the top
fn step_down(items: &[MenuItem], from: usize) -> usize {
    let count = items.len();
    let mut index = from;
    for _ in 0..count {
        index = if index + 1 >= count { 0 } else { index + 1 };
        if items[index].enabled {
            return index;
        }
    }
    from
}

/// Show `menu` on `console` until an item is committed.
///
/// Returns [`Selection::Nothing`] straight away, without touching the console,
/// when the menu has no enabled items. Otherwise the console's colors and cursor
/// visibility are restored before returning, also when the terminal fails.
pub fn run_menu<C: Console + ?Sized>(menu: &mut Menu, console: &mut C, clear: bool) -> Result<Selection> {
    let mut machine = SelectionMachine::new();
    if machine.start(menu.items()) == MenuState::Empty {
        debug!(items = menu.len(), "menu has nothing to select");
        return Ok(Selection::Nothing);
    }
    debug!(items = menu.len(), active = machine.active(), "menu shown");

    let saved_colors = console.colors();
    let saved_visible = console.cursor_visible();

    let mut anchor_row = 0;
    let looped = interact(menu, console, &mut machine, &mut anchor_row);
    let restored = console
        .set_colors(saved_colors)
        .and_then(|_| console.set_cursor_visible(saved_visible));

    let index = looped?;
    restored?;

    if clear {
        clear_menu(console, anchor_row, frame_rows(menu.title(), menu.len()))?;
    }
    console.flush()?;

    let id = menu[index].id;
    debug!(id, index, "menu item committed");
    Ok(Selection::Chosen { id, index })
}

/// Paint/read loop. Returns the committed index and leaves the frame's anchor
/// row in `anchor_row`.
fn interact<C: Console + ?Sized>(
    menu: &mut Menu,
    console: &mut C,
    machine: &mut SelectionMachine,
    anchor_row: &mut u16,
) -> Result<usize> {
    let (column, _) = console.cursor_position()?;
    if column > 0 {
        console.write_line("")?;
    }
    let (_, row) = console.cursor_position()?;
    *anchor_row = row;
    console.set_cursor_visible(false)?;

    let mut first_frame = true;
    loop {
        let data = MenuRenderData {
            title: menu.title(),
            items: menu.items(),
            active: machine.active(),
            colors: menu.colors(),
            anchor_row: *anchor_row,
        };
        let rows = render_menu(console, &data)?;
        console.flush()?;
        trace!(active = machine.active(), rows, "menu repainted");

        if first_frame {
            // A frame painted near the bottom scrolls the screen; follow it.
            let (_, row) = console.cursor_position()?;
            *anchor_row = row.saturating_sub(rows);
            first_frame = false;
        }
        machine.await_input();

        let key = console.read_key()?;
        debug!(?key, active = machine.active(), "menu key");
        if machine.handle_key(key, menu.items_mut()) == MenuState::Committed {
            return Ok(machine.active());
        }
    }
}
