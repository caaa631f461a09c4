//! hueclear terminal (crossterm) entry point.

use hueclear::{GameConfig, HueClearModel};
use hueclear_core::app::{App, AppConfig};
use hueclear_crossterm::CrosstermDriver;

fn main() {
    // The board owns the terminal; keep stderr quiet unless asked.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut app = App::new(AppConfig {
        model: HueClearModel::new(GameConfig::default()),
        driver: CrosstermDriver::new(),
    });

    if let Err(e) = app.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
