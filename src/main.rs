// conmenu demo: shows a sample menu inline and reports the choice

use std::io;

use clap::Parser;
use crossterm::style::Color;
use tracing_subscriber::EnvFilter;

use conmenu::ui::theme::parse_color;
use conmenu::{CrosstermConsole, Menu, MenuItem, Selection};

/// Environment variable holding the log filter (e.g. `CONMENU_LOG=debug`)
const LOG_ENV: &str = "CONMENU_LOG";

#[derive(Parser, Debug)]
#[command(name = "conmenu", version, about = "Inline terminal menu demo")]
struct Cli {
    /// Title printed above the items
    #[arg(long, default_value = "Test Menu")]
    title: String,

    /// Foreground color (name like `white`, `dark_cyan` or `#rrggbb`)
    #[arg(long, value_parser = parse_color_arg)]
    fore: Option<Color>,

    /// Background color
    #[arg(long, value_parser = parse_color_arg)]
    back: Option<Color>,

    /// Leave the menu on screen after a choice is made
    #[arg(long)]
    keep: bool,
}

fn parse_color_arg(value: &str) -> Result<Color, String> {
    parse_color(value).map_err(|e| e.to_string())
}

fn init_logging() {
    // Log lines share the screen with the menu, so stay quiet unless asked.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    let mut console = CrosstermConsole::stdout();
    let mut menu = Menu::for_console(&console).with_title(cli.title);

    let mut colors = menu.colors();
    if let Some(fore) = cli.fore {
        colors.fore = fore;
    }
    if let Some(back) = cli.back {
        colors.back = back;
    }
    menu.set_colors(colors);

    menu.set(1, MenuItem::new("Foo"));
    menu.set(2, MenuItem::checkable("Bar", false));
    menu.set(0, MenuItem::new("(Baz)").disabled());
    menu.set(0, MenuItem::new("(Xyz)").disabled());
    menu.set(3, MenuItem::new("Test"));

    match menu.show(&mut console, !cli.keep)? {
        Selection::Chosen { id, index } => {
            println!("Selected = [{}] {}", id, menu[index].text);
        }
        Selection::Nothing => println!("Nothing to select"),
    }

    let bar = menu.get(2)?.checked().unwrap_or(false);
    println!("Bar = {}", bar);

    Ok(())
}
