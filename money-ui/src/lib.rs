pub mod components;
pub mod gui;
pub mod logging;
pub mod screens;
pub mod service;

use gpui::{App, actions};
pub use gui::{setup_app, start_app};
pub use service::UiService;
use tracing::info;

actions!(money_assistant, [Quit]);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
