use std::path::Path;

use anyhow::{Context as _, Result};
use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use money_core::AppConfig;
use tracing::{error, info};

use crate::{Quit, components::window_size, logging::log_task_error, quit, service::UiService};

/// Loads the config at `path`, or the defaults when no path is given.
///
/// A config that cannot be loaded is logged and replaced by the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };
    match AppConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "config loaded");
            config
        }
        Err(error) => {
            error!(%error, "unable to load config, using defaults");
            AppConfig::default()
        }
    }
}

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "MoneyAssistant".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the main window with the welcome screen showing.
pub fn open_main_window(
    config: AppConfig,
    cx: &mut App,
) -> Result<()> {
    let bounds = Bounds::centered(None, window_size(&config.window), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(config.window.title.clone().into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    info!(
        title = %config.window.title,
        geometry = %config.window.geometry(),
        "opening main window"
    );
    cx.open_window(options, |window, cx| {
        let service = cx.new(|cx| UiService::new(&config, cx));
        service.update(cx, |service, cx| {
            log_task_error("start navigation", service.start(cx));
        });
        cx.new(|cx| Root::new(AnyView::from(service), window, cx))
    })
    .context("unable to open main window")?;

    Ok(())
}

/// Runs the application until the window is closed. Blocks the calling thread.
pub fn start_app(config: AppConfig) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(config, cx) {
                error!(?error, "unable to start MoneyAssistant");
                cx.quit();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_config_path_gives_defaults() {
        assert_eq!(load_config_or_default(None), AppConfig::default());
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        assert_eq!(
            load_config_or_default(Some(Path::new("does/not/exist.toml"))),
            AppConfig::default()
        );
    }

    #[test]
    fn degenerate_window_size_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 0.0\nheight = 400.0\n").unwrap();

        let config = load_config_or_default(Some(&path));
        assert_eq!(config.window.geometry(), "600x400");
    }
}
