use money_core::FileDialogSpec;
use rfd::AsyncFileDialog;
use std::path::PathBuf;
use tracing::debug;

/// Opens the native file picker described by `spec`.
///
/// Resolves to `None` when the user cancels.
pub async fn pick_file(spec: FileDialogSpec) -> Option<PathBuf> {
    let mut dialog = AsyncFileDialog::new().set_title(&spec.title);

    // macOS treats `*` as a literal file type rather than a wildcard.
    #[cfg(target_os = "macos")]
    let filters = spec.filter_pairs_without_catch_all();
    #[cfg(not(target_os = "macos"))]
    let filters = spec.filter_pairs();

    for (name, extensions) in filters {
        dialog = dialog.add_filter(name, extensions);
    }

    debug!(title = %spec.title, "opening file dialog");
    let file = dialog.pick_file().await?;
    Some(file.path().to_path_buf())
}
