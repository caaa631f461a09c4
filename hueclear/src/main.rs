//! hueclear graphical (winit + softbuffer) entry point.

use hueclear::{GameConfig, HueClearModel, model::TITLE};
use hueclear_core::app::{AppRunner, EventLoopDriver};
use hueclear_winit::{WinitConfig, WinitDriver};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let model = HueClearModel::new(GameConfig::default());
    let driver = WinitDriver::new(WinitConfig {
        title: TITLE.into(),
        ..Default::default()
    });
    let runner = AppRunner::new(Box::new(model));

    if let Err(e) = driver.run(runner) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
