pub mod config;
pub mod dialog;
pub mod screen;
pub mod selection;

pub use config::{AppConfig, ConfigError, ScreenText, WindowPreferences};
pub use dialog::{FileDialogSpec, FileFilter, STATEMENT_FILTERS};
pub use screen::{NavigationError, Navigator, Screen};
pub use selection::{FileSelection, SelectedFile, SelectionError};
