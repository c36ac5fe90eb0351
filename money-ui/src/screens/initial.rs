use std::{
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

use gpui::{
    App, Context, Image, ImageFormat, ImageSource, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, img, px,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use money_core::ScreenText;
use tracing::warn;

use crate::components::make_button;

const BUNDLED_ASSISTANT_PNG: &[u8] = include_bytes!("../../assets/assistant.png");

/// Handler run when the upload button is pressed.
pub type UploadAction = Rc<dyn Fn(&mut Window, &mut App)>;

/// Where the welcome image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantImage {
    /// PNG compiled into the binary.
    Bundled,
    File(PathBuf),
}

impl AssistantImage {
    /// Uses the configured file when it exists, the bundled image otherwise.
    pub fn resolve(configured: Option<&Path>) -> Self {
        match configured {
            None => Self::Bundled,
            Some(path) if path.is_file() => Self::File(path.to_path_buf()),
            Some(path) => {
                warn!(
                    path = %path.display(),
                    "configured assistant image not found, using bundled image"
                );
                Self::Bundled
            }
        }
    }

    fn source(&self) -> ImageSource {
        match self {
            Self::Bundled => Arc::new(Image::from_bytes(
                ImageFormat::Png,
                BUNDLED_ASSISTANT_PNG.to_vec(),
            ))
            .into(),
            Self::File(path) => path.clone().into(),
        }
    }
}

/// Welcome screen.
///
/// It knows nothing about navigation: pressing the upload button runs
/// whatever [`UploadAction`] it was constructed with.
pub struct InitialScreen {
    welcome: SharedString,
    subtitle: SharedString,
    upload_label: SharedString,
    image: ImageSource,
    on_upload: UploadAction,
}

impl InitialScreen {
    pub fn new(
        text: &ScreenText,
        image: AssistantImage,
        on_upload: impl Fn(&mut Window, &mut App) + 'static,
    ) -> Self {
        Self {
            welcome: text.welcome.clone().into(),
            subtitle: text.subtitle.clone().into(),
            upload_label: text.upload_button.clone().into(),
            image: image.source(),
            on_upload: Rc::new(on_upload),
        }
    }

    pub fn upload_action(&self) -> UploadAction {
        self.on_upload.clone()
    }
}

impl Render for InitialScreen {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let on_upload = self.on_upload.clone();

        v_flex()
            .size_full()
            .items_center()
            .pt_5()
            .gap_3()
            .child(div().text_xl().child(self.welcome.clone()))
            .child(img(self.image.clone()).w(px(96.)).h(px(96.)))
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.subtitle.clone()),
            )
            .child(h_flex().w_full().px_5().pt_2().child(make_button(
                "upload-statement",
                self.upload_label.clone(),
                move |_, window, cx| on_upload(window, cx),
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_image_is_used_by_default() {
        assert_eq!(AssistantImage::resolve(None), AssistantImage::Bundled);
    }

    #[test]
    fn bundled_image_is_a_png() {
        assert!(BUNDLED_ASSISTANT_PNG.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn missing_configured_image_falls_back_to_bundled() {
        assert_eq!(
            AssistantImage::resolve(Some(Path::new("no/such/assistant.png"))),
            AssistantImage::Bundled
        );
    }

    #[test]
    fn existing_configured_image_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("owl.png");
        std::fs::write(&path, BUNDLED_ASSISTANT_PNG).unwrap();

        assert_eq!(
            AssistantImage::resolve(Some(&path)),
            AssistantImage::File(path)
        );
    }
}
