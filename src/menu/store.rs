//! Ordered item store
//!
//! [`Menu`] owns the items shown by a run, in display order. Items are addressed
//! by their caller-assigned id through upsert ([`Menu::set`]) and lookup
//! ([`Menu::get`]); positional access exists for rendering.
//!
//! # Id 0
//!
//! Id 0 marks an untracked item: [`Menu::set`] with id 0 always appends, and
//! [`Menu::replace`] never matches it. Several items may share id 0, in which
//! case [`Menu::get`] returns the first one.

use super::errors::{MenuError, Result};
use super::item::{ItemId, MenuItem};
use crate::console::{Console, CrosstermConsole};
use crate::ui::selection::{self, Selection};
use crate::ui::theme::ColorPair;
use std::ops::Index;

/// A titled, colored list of [`MenuItem`]s
#[derive(Debug, Clone, Default)]
pub struct Menu {
    title: String,
    colors: ColorPair,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Empty menu without a title, using [`DEFAULT_COLORS`](crate::ui::theme::DEFAULT_COLORS)
    pub fn new() -> Self {
        Menu::default()
    }

    /// Empty menu that adopts the console's current colors
    pub fn for_console<C: Console + ?Sized>(console: &C) -> Self {
        Menu::new().with_colors(console.colors())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    pub fn set_colors(&mut self, colors: ColorPair) {
        self.colors = colors;
    }

    /// Append an enabled plain item with id 0
    pub fn add(&mut self, text: impl Into<String>) -> ItemId {
        self.add_item(0, text, true)
    }

    /// Append a plain item with id 0
    pub fn add_enabled(&mut self, text: impl Into<String>, enabled: bool) -> ItemId {
        self.add_item(0, text, enabled)
    }

    /// Append an enabled plain item with the given id
    pub fn add_with_id(&mut self, id: ItemId, text: impl Into<String>) -> ItemId {
        self.add_item(id, text, true)
    }

    /// Append a plain item and return its id
    pub fn add_item(&mut self, id: ItemId, text: impl Into<String>, enabled: bool) -> ItemId {
        let item = MenuItem::new(text).with_id(id).with_enabled(enabled);
        self.items.push(item);
        id
    }

    /// Replace the first item with `id`, keeping its position.
    ///
    /// The replacement takes over `id`. Returns `false` when nothing matched,
    /// which is always the case for id 0.
    pub fn replace(&mut self, id: ItemId, mut item: MenuItem) -> bool {
        if id == 0 {
            return false;
        }
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                item.id = id;
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Upsert by id. Returns `true` if an existing item was replaced.
    ///
    /// Id 0 appends `item` as given. Any other id replaces the first match in
    /// place, or appends `item` carrying that id.
    pub fn set(&mut self, id: ItemId, mut item: MenuItem) -> bool {
        if id == 0 {
            self.items.push(item);
            return false;
        }
        item.id = id;
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id == id) {
            *slot = item;
            return true;
        }
        self.items.push(item);
        false
    }

    /// First item with `id`
    pub fn get(&self, id: ItemId) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(MenuError::NotFound { id })
    }

    pub fn get_mut(&mut self, id: ItemId) -> Result<&mut MenuItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(MenuError::NotFound { id })
    }

    /// Item at display position `index`
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    // Fields only; the item list itself keeps its shape during a run.
    pub(crate) fn items_mut(&mut self) -> &mut [MenuItem] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    /// Whether at least one item can be selected
    pub fn has_enabled(&self) -> bool {
        self.items.iter().any(|item| item.enabled)
    }

    /// Display the menu on `console` and loop until an item is chosen.
    ///
    /// With `clear`, the painted rows are blanked afterwards and the cursor
    /// returns to the row the menu started on.
    pub fn show<C: Console + ?Sized>(&mut self, console: &mut C, clear: bool) -> Result<Selection> {
        selection::run_menu(self, console, clear)
    }

    /// Like [`show`](Menu::show), but returns the chosen id, or 0 if nothing
    /// could be chosen.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C, clear: bool) -> Result<ItemId> {
        Ok(self.show(console, clear)?.id())
    }

    /// [`show`](Menu::show) on the process's stdout terminal
    pub fn show_in_terminal(&mut self, clear: bool) -> Result<Selection> {
        let mut console = CrosstermConsole::stdout();
        self.show(&mut console, clear)
    }
}

impl Index<usize> for Menu {
    type Output = MenuItem;

    fn index(&self, index: usize) -> &MenuItem {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
