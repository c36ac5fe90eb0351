pub mod dialogs;
pub mod window;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px, size};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};
use money_core::WindowPreferences;

pub use window::MainWindow;

/// Initial window size in pixels.
pub fn window_size(prefs: &WindowPreferences) -> Size<Pixels> {
    size(px(prefs.width), px(prefs.height))
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .min_w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_window_size_is_600_by_400() {
        let size = window_size(&WindowPreferences::default());
        assert_eq!(size.width, px(600.));
        assert_eq!(size.height, px(400.));
    }
}
