use gpui::{
    AnyView, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
};
use gpui_component::{button::Button, h_flex, v_flex};
use money_core::Screen;
use tracing::warn;

use crate::{Quit, quit};

/// Root chrome of the application window.
///
/// Holds one region per [`Screen`] and a close button in the bottom-right
/// corner. Only the region of the visible screen is rendered; nothing is
/// shown before navigation starts.
#[derive(IntoElement)]
pub struct MainWindow {
    close_label: SharedString,
    regions: Vec<(Screen, AnyView)>,
    visible: Option<Screen>,
}

impl MainWindow {
    pub fn new(close_label: impl Into<SharedString>) -> Self {
        Self {
            close_label: close_label.into(),
            regions: Vec::with_capacity(Screen::all().len()),
            visible: None,
        }
    }

    /// Registers the view rendered for `screen`, replacing any earlier one.
    pub fn region(
        mut self,
        screen: Screen,
        view: impl Into<AnyView>,
    ) -> Self {
        self.regions.retain(|(s, _)| *s != screen);
        self.regions.push((screen, view.into()));
        self
    }

    pub fn show(
        mut self,
        visible: Option<Screen>,
    ) -> Self {
        self.visible = visible;
        self
    }

    fn visible_region(&self) -> Option<AnyView> {
        let screen = self.visible?;
        let view = self
            .regions
            .iter()
            .find(|(s, _)| *s == screen)
            .map(|(_, view)| view.clone());
        if view.is_none() {
            warn!(%screen, "no region registered for screen");
        }
        view
    }
}

impl RenderOnce for MainWindow {
    fn render(
        self,
        _: &mut Window,
        _: &mut App,
    ) -> impl IntoElement {
        let region = self.visible_region();

        v_flex()
            .size_full()
            .child(div().flex_1().w_full().children(region))
            .child(
                h_flex().w_full().justify_end().p_2().child(
                    Button::new("close-app")
                        .label(self.close_label)
                        .on_click(|_, _, cx: &mut App| quit(&Quit, cx)),
                ),
            )
    }
}
