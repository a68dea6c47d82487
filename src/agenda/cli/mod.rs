//! # CLI Layer
//!
//! This module is the terminal client for the agenda library. It is the only
//! place that:
//! - Reads stdin and writes stdout
//! - Parses process arguments (clap)
//! - Sets up logging
//! - Formats output for humans (tables, colors)
//!
//! ## Structure
//!
//! - `setup.rs`: clap definition of the (few) process flags
//! - `menu.rs`: the menu state machine and the pause/clear screen
//! - `handlers.rs`: one handler per menu option
//! - `render.rs`: tables, messages and menu text
//! - `styles.rs`: the color theme
//!
//! Handlers and the menu are generic over the reader, writer and screen so the
//! whole session can be driven from a byte buffer in tests.

mod handlers;
mod menu;
mod render;
mod setup;
mod styles;

use agenda::api::AgendaApi;
use agenda::config::{config_dir, AgendaConfig};
use agenda::error::Result;
use agenda::input::Prompter;
use agenda::store::memory::InMemoryStore;
use clap::Parser;
use env_logger::Env;
use log::debug;
use menu::{run_menu, TermScreen};
use setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli);

    let config = match config_dir() {
        Some(dir) => AgendaConfig::load_or_default(dir),
        None => AgendaConfig::default(),
    };

    if cli.no_color || !config.color {
        console::set_colors_enabled(false);
    }

    let pause = config.pause_between_commands && !cli.no_pause;
    let clear = config.clear_screen && !cli.no_pause;
    debug!("pause={} clear={}", pause, clear);

    let mut api = AgendaApi::new(InMemoryStore::new());
    let stdin = std::io::stdin();
    let mut io = Prompter::new(stdin.lock(), std::io::stdout());
    let mut screen = TermScreen::new(pause, clear);

    run_menu(&mut api, &mut io, &mut screen)
}

fn init_logger(cli: &Cli) {
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
