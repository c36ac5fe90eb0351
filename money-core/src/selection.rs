use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Label shown on the upload screen before anything is selected.
pub const DEFAULT_UPLOAD_LABEL: &str = "Upload File";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selected path '{0}' has no file name")]
    NoFileName(PathBuf),
}

/// A file the user picked in the file dialog.
///
/// Only the path is kept; the file itself is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SelectionError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| SelectionError::NoFileName(path.clone()))?;
        Ok(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the file, e.g. `statement.csv`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SelectedFile {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Upload screen bookkeeping: the label text and the last selected file.
#[derive(Debug, Clone)]
pub struct FileSelection {
    label: String,
    selected: Option<SelectedFile>,
}

impl Default for FileSelection {
    fn default() -> Self {
        Self::new(DEFAULT_UPLOAD_LABEL)
    }
}

impl FileSelection {
    pub fn new(initial_label: impl Into<String>) -> Self {
        Self {
            label: initial_label.into(),
            selected: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Records a confirmed selection, replacing any previous one.
    pub fn select(
        &mut self,
        path: impl Into<PathBuf>,
    ) -> Result<&SelectedFile, SelectionError> {
        let file = SelectedFile::new(path)?;
        info!(file = %file, "file selected");
        self.label = format!("Selected: {}", file.name());
        Ok(&*self.selected.insert(file))
    }

    /// Applies the outcome of a file dialog.
    ///
    /// `None` means the dialog was cancelled and leaves everything untouched.
    /// Returns `true` when the state changed.
    pub fn apply_dialog_result(
        &mut self,
        picked: Option<PathBuf>,
    ) -> bool {
        let Some(path) = picked else {
            debug!("file dialog cancelled");
            return false;
        };

        match self.select(path) {
            Ok(_) => true,
            Err(error) => {
                warn!(%error, "ignoring file dialog result");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_default_label_and_no_file() {
        let selection = FileSelection::default();
        assert_eq!(selection.label(), "Upload File");
        assert!(selection.selected().is_none());
    }

    #[test]
    fn selecting_updates_label_and_records_file() {
        let mut selection = FileSelection::default();
        assert!(selection.apply_dialog_result(Some(PathBuf::from("/tmp/bank/statement.csv"))));

        assert_eq!(selection.label(), "Selected: statement.csv");
        let file = selection.selected().unwrap();
        assert_eq!(file.path(), Path::new("/tmp/bank/statement.csv"));
        assert_eq!(file.name(), "statement.csv");
    }

    #[test]
    fn cancel_keeps_previous_label() {
        let mut selection = FileSelection::default();
        assert!(!selection.apply_dialog_result(None));
        assert_eq!(selection.label(), "Upload File");

        selection.select("march.xlsx").unwrap();
        assert!(!selection.apply_dialog_result(None));
        assert_eq!(selection.label(), "Selected: march.xlsx");
        assert_eq!(selection.selected().unwrap().name(), "march.xlsx");
    }

    #[test]
    fn second_selection_replaces_first() {
        let mut selection = FileSelection::default();
        selection.select("/data/january.csv").unwrap();
        selection.select("/data/february.xls").unwrap();

        assert_eq!(
            selection.selected().map(SelectedFile::path),
            Some(Path::new("/data/february.xls"))
        );
        assert_eq!(selection.label(), "Selected: february.xls");
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let mut selection = FileSelection::default();
        assert_eq!(
            SelectedFile::new("/").unwrap_err(),
            SelectionError::NoFileName(PathBuf::from("/"))
        );
        assert!(!selection.apply_dialog_result(Some(PathBuf::from("/"))));
        assert_eq!(selection.label(), "Upload File");
        assert!(selection.selected().is_none());
    }
}
