use anyhow::Result;
use gpui::{
    App, AppContext, Context, Entity, IntoElement, Render, SharedString, Subscription,
    Window,
};
use money_core::{AppConfig, Navigator, Screen};
use tracing::info;

#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};
use crate::{
    components::MainWindow,
    logging::log_task_error,
    screens::{FileUploadScreen, InitialScreen, initial::AssistantImage},
};

/// Root view: owns the screens and decides which one the window shows.
pub struct UiService {
    navigator: Navigator,
    initial: Entity<InitialScreen>,
    file_upload: Entity<FileUploadScreen>,
    close_label: SharedString,
    _window_close_subscription: Subscription,
}

impl UiService {
    pub fn new(
        config: &AppConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let this = cx.weak_entity();
        let open_upload = move |_: &mut Window, cx: &mut App| {
            let result = this
                .update(cx, |service, cx| service.open_file_upload_screen(cx))
                .and_then(|navigated| navigated);
            log_task_error("open file upload screen", result);
        };

        let image = AssistantImage::resolve(config.assistant_image.as_deref());
        let initial = cx.new(|_| InitialScreen::new(&config.text, image, open_upload));
        let file_upload = cx.new(|_| FileUploadScreen::new(&config.text));

        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("main window closed");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        Self {
            navigator: Navigator::new(),
            initial,
            file_upload,
            close_label: config.window.close_label.clone().into(),
            _window_close_subscription: subscription,
        }
    }

    pub fn current_screen(&self) -> Option<Screen> {
        self.navigator.current()
    }

    /// Shows the welcome screen.
    pub fn start(
        &mut self,
        cx: &mut Context<Self>,
    ) -> Result<()> {
        self.navigator.start()?;
        cx.notify();
        Ok(())
    }

    /// Shows the upload screen. Bound to the welcome screen's upload button.
    pub fn open_file_upload_screen(
        &mut self,
        cx: &mut Context<Self>,
    ) -> Result<()> {
        self.navigator.navigate_to_upload()?;
        cx.notify();
        Ok(())
    }
}

impl Render for UiService {
    fn render(
        &mut self,
        _: &mut Window,
        _: &mut Context<Self>,
    ) -> impl IntoElement {
        MainWindow::new(self.close_label.clone())
            .region(Screen::Initial, self.initial.clone())
            .region(Screen::FileUpload, self.file_upload.clone())
            .show(self.current_screen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use pretty_assertions::assert_eq;

    #[gpui::test]
    fn upload_button_action_switches_to_upload_screen(cx: &mut TestAppContext) {
        let service = cx.new(|cx| UiService::new(&AppConfig::default(), cx));
        assert_eq!(service.read_with(cx, |service, _| service.current_screen()), None);

        service
            .update(cx, |service, cx| service.start(cx))
            .unwrap();
        assert_eq!(
            service.read_with(cx, |service, _| service.current_screen()),
            Some(Screen::Initial)
        );

        let upload = service.read_with(cx, |service, cx| service.initial.read(cx).upload_action());
        cx.add_empty_window().update(|window, cx| upload(window, cx));

        assert_eq!(
            service.read_with(cx, |service, _| service.current_screen()),
            Some(Screen::FileUpload)
        );
    }

    #[gpui::test]
    fn upload_action_keeps_upload_screen_and_rejects_restart(cx: &mut TestAppContext) {
        let service = cx.new(|cx| UiService::new(&AppConfig::default(), cx));
        service
            .update(cx, |service, cx| service.start(cx))
            .unwrap();

        let upload = service.read_with(cx, |service, cx| service.initial.read(cx).upload_action());
        let window = cx.add_empty_window();
        window.update(|window, cx| upload(window, cx));
        window.update(|window, cx| upload(window, cx));

        assert!(service.update(cx, |service, cx| service.start(cx)).is_err());
        assert_eq!(
            service.read_with(cx, |service, _| service.current_screen()),
            Some(Screen::FileUpload)
        );
    }
}
