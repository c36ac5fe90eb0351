use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
};
use gpui_component::v_flex;
use money_core::{FileDialogSpec, FileSelection, ScreenText};
use tracing::debug;

use crate::{
    components::{dialogs::pick_file, make_button},
    logging::log_task_error,
};

/// Bank statement upload screen: a status label and a "Select file" button.
pub struct FileUploadScreen {
    selection: FileSelection,
    dialog: FileDialogSpec,
    select_label: SharedString,
    dialog_open: bool,
}

impl FileUploadScreen {
    pub fn new(text: &ScreenText) -> Self {
        Self {
            selection: FileSelection::new(text.upload_label.clone()),
            dialog: FileDialogSpec::statement(text.dialog_title.clone()),
            select_label: text.select_button.clone().into(),
            dialog_open: false,
        }
    }

    fn prompt_user_for_file(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        if self.dialog_open {
            debug!("file dialog already open");
            return;
        }
        self.dialog_open = true;

        let spec = self.dialog.clone();
        cx.spawn(async move |this, cx| {
            let picked = pick_file(spec).await;
            let result = this.update(cx, |screen, cx| {
                screen.dialog_open = false;
                if screen.selection.apply_dialog_result(picked) {
                    cx.notify();
                }
            });
            log_task_error("file dialog", result);
        })
        .detach();
    }
}

impl Render for FileUploadScreen {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .size_full()
            .items_center()
            .pt_5()
            .gap_4()
            .child(div().text_lg().child(SharedString::from(
                self.selection.label().to_string(),
            )))
            .child(make_button(
                "select-file",
                self.select_label.clone(),
                cx.listener(|screen, _: &ClickEvent, _, cx| screen.prompt_user_for_file(cx)),
            ))
    }
}
