mod backend;
mod frontend;

use crate::backend::config::AppConfig;
use crate::frontend::app::App;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Logging setup
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default();
    let size = LogicalSize::new(
        f64::from(config.window.width),
        f64::from(config.window.height),
    );

    log::debug!(
        "starting HR Desk with root page `{}`",
        config.routing.root_page
    );

    let desktop_config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("HR Desk")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(desktop_config).launch(App);
}
