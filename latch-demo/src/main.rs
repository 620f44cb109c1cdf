//! Select widget demo.
//!
//! Renders every display variant of the latch select widget: a plain list
//! backed by remote data, a static plain list, icon/image/active-status
//! lists, and the single- and multi-select search variants.
//!
//! Tab cycles focus, Enter/Space/Down opens the focused widget, and the
//! mouse works everywhere. `q` quits.

mod app;
mod posts;
mod terminal;
mod ui;

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[tokio::main]
async fn main() {
    // Log to a file; stdout belongs to the TUI.
    if let Ok(log_file) = File::create("latch-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = app::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
