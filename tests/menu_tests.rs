// Integration tests driving whole menu runs through the mock console

use conmenu::console::MenuKey::{Down, Enter, Other, Up};
use conmenu::{ColorPair, Console, Menu, MenuError, MenuItem, MenuKey, MockConsole, Selection};
use crossterm::style::Color;
use pretty_assertions::assert_eq;

fn abc_menu() -> Menu {
    let mut menu = Menu::new();
    menu.add_with_id(1, "A");
    menu.add_item(2, "B", false);
    menu.add_with_id(3, "C");
    menu
}

fn run_keys(menu: &mut Menu, keys: &[MenuKey]) -> Selection {
    let mut console = MockConsole::new().with_keys(keys.iter().copied());
    menu.show(&mut console, true).expect("Menu run failed")
}

#[test]
fn test_scenario_skip_disabled_then_commit() {
    let mut menu = abc_menu();
    let mut console = MockConsole::new().with_keys([Down, Up, Enter]);

    let id = menu.run(&mut console, true).expect("Menu run failed");

    assert_eq!(id, 1);
    assert_eq!(console.keys_read(), 3);
}

#[test]
fn test_down_lands_past_disabled() {
    let mut menu = abc_menu();
    let selection = run_keys(&mut menu, &[Down, Enter]);
    assert_eq!(selection, Selection::Chosen { id: 3, index: 2 });
}

#[test]
fn test_navigation_wraps_down_and_up() {
    let count = 4;
    for start in 0..count {
        for key in [Down, Up] {
            let mut menu = Menu::new();
            for id in 1..=count {
                menu.add_with_id(id as i32, format!("Item {}", id));
            }

            let mut keys = vec![Down; start];
            keys.extend(std::iter::repeat(key).take(count));
            keys.push(Enter);

            let selection = run_keys(&mut menu, &keys);
            assert_eq!(selection.index(), Some(start), "start {} key {:?}", start, key);
        }
    }
}

#[test]
fn test_disabled_items_are_never_chosen() {
    let disabled = [1usize, 3];
    for mask in 0u32..(1 << 6) {
        let mut menu = Menu::new();
        for index in 0..5 {
            menu.add_item(index as i32 + 10, format!("row {}", index), !disabled.contains(&index));
        }

        let mut keys: Vec<MenuKey> = (0..6)
            .map(|bit| if mask & (1 << bit) != 0 { Up } else { Down })
            .collect();
        keys.push(Enter);

        let selection = run_keys(&mut menu, &keys);
        let index = selection.index().expect("Expected a committed item");
        assert!(!disabled.contains(&index), "keys {:?} landed on {}", keys, index);
    }
}

#[test]
fn test_leading_disabled_item_is_skipped_on_entry() {
    let mut menu = Menu::new();
    menu.add_item(1, "off", false);
    menu.add_with_id(2, "on");

    let selection = run_keys(&mut menu, &[Enter]);
    assert_eq!(selection.id(), 2);
}

#[test]
fn test_toggle_twice_restores_value() {
    let mut menu = Menu::new();
    menu.set(5, MenuItem::checkable("Bar", false));
    menu.set(6, MenuItem::new("Done"));

    let selection = run_keys(&mut menu, &[Enter, Enter, Down, Enter]);

    assert_eq!(selection.id(), 6);
    assert_eq!(menu.get(5).unwrap().checked(), Some(false));
}

#[test]
fn test_toggle_once_flips_value() {
    let mut menu = Menu::new();
    menu.set(5, MenuItem::checkable("Bar", false));
    menu.set(6, MenuItem::new("Done"));

    run_keys(&mut menu, &[Enter, Down, Enter]);

    assert_eq!(menu.get(5).unwrap().checked(), Some(true));
}

#[test]
fn test_commit_stops_reading_keys() {
    let mut menu = abc_menu();
    let mut console = MockConsole::new().with_keys([Other, Down, Up, Down, Enter, Down, Up]);

    let selection = menu.show(&mut console, true).unwrap();

    assert_eq!(selection.id(), 3);
    assert_eq!(console.keys_read(), 5);
    assert_eq!(console.pending_keys(), 2);
}

#[test]
fn test_empty_menu_returns_zero_without_input() {
    let mut menu = Menu::new().with_title("Nothing here");
    let mut console = MockConsole::new();

    assert_eq!(menu.show(&mut console, true).unwrap(), Selection::Nothing);
    assert_eq!(menu.run(&mut console, true).unwrap(), 0);
    assert_eq!(console.keys_read(), 0);
    assert!(console.lines().is_empty());
}

#[test]
fn test_all_disabled_returns_zero_without_input() {
    let mut menu = Menu::new();
    menu.add_enabled("one", false);
    menu.add_item(4, "two", false);
    let mut console = MockConsole::new();

    assert_eq!(menu.run(&mut console, true).unwrap(), 0);
    assert_eq!(console.keys_read(), 0);
    assert!(console.cursor_visible());
}

#[test]
fn test_upsert_sample_run() {
    let mut menu = Menu::new().with_title("Test Menu");
    menu.set(1, MenuItem::new("Foo"));
    menu.set(2, MenuItem::checkable("Bar", false));
    menu.set(0, MenuItem::new("Baz"));
    menu.set(0, MenuItem::new("Xyz"));
    menu.set(3, MenuItem::new("Test"));

    let ids: Vec<i32> = menu.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 0, 0, 3]);
    assert_eq!(menu.get(2).unwrap().text, "Bar");

    // Toggle Bar, wander off and back, then commit Foo.
    let selection = run_keys(&mut menu, &[Down, Enter, Down, Up, Up, Enter]);

    assert_eq!(selection.id(), 1);
    assert_eq!(menu.get(2).unwrap().checked(), Some(true));
}

#[test]
fn test_clear_blanks_frame_and_restores_console() {
    let console_colors = ColorPair::new(Color::Reset, Color::Reset);
    let menu_colors = ColorPair::new(Color::DarkBlue, Color::White);
    let mut menu = abc_menu().with_title("Title").with_colors(menu_colors);
    let mut console = MockConsole::new()
        .with_width(12)
        .with_colors(console_colors)
        .with_keys([Enter]);
    console.write_line("before").unwrap();

    menu.show(&mut console, true).unwrap();

    assert_eq!(console.line(0), "before");
    for row in 1..5 {
        assert_eq!(console.raw_line(row), " ".repeat(12));
    }
    assert_eq!(console.cursor_position().unwrap(), (0, 1));
    assert_eq!(console.colors(), console_colors);
    assert!(console.cursor_visible());
}

#[test]
fn test_keep_leaves_final_frame() {
    let colors = ColorPair::new(Color::Black, Color::Grey);
    let mut menu = abc_menu().with_title("Pick").with_colors(colors);
    let mut console = MockConsole::new().with_keys([Down, Enter]);

    menu.show(&mut console, false).unwrap();

    assert_eq!(console.lines(), vec!["Pick", "    A", "B", "    C"]);
    assert_eq!(console.cell(0, 1).unwrap().colors, colors);
    assert_eq!(console.cell(0, 3).unwrap().colors, colors.reversed());
}

#[test]
fn test_menu_starts_on_fresh_line() {
    let mut menu = abc_menu();
    let mut console = MockConsole::new().with_keys([Enter]);
    console.write("prompt> ").unwrap();

    menu.show(&mut console, false).unwrap();

    assert_eq!(console.line(0), "prompt>");
    assert_eq!(console.line(1), "    A");
}

#[test]
fn test_terminal_failure_restores_console() {
    let mut menu = abc_menu();
    let colors = ColorPair::new(Color::Reset, Color::Reset);
    let mut console = MockConsole::new().with_colors(colors).with_keys([Down]);

    let err = menu.show(&mut console, true).unwrap_err();

    assert!(matches!(err, MenuError::Io(_)), "unexpected error {:?}", err);
    assert_eq!(console.colors(), colors);
    assert!(console.cursor_visible());
}

#[test]
fn test_for_console_adopts_console_colors() {
    let colors = ColorPair::new(Color::DarkGreen, Color::Yellow);
    let console = MockConsole::new().with_colors(colors);
    assert_eq!(Menu::for_console(&console).colors(), colors);
}
