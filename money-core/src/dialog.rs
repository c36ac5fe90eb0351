//! What the statement file dialog asks the platform for.

/// A named group of file extensions offered by the file dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    /// `true` for the "All files" group, whose only extension is the `*` wildcard.
    pub fn is_catch_all(&self) -> bool {
        self.extensions == ["*"]
    }
}

/// Filters for bank statements, in the order they appear in the dialog.
pub const STATEMENT_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Excel files",
        extensions: &["xlsx", "xls"],
    },
    FileFilter {
        name: "CSV files",
        extensions: &["csv"],
    },
    FileFilter {
        name: "All files",
        extensions: &["*"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialogSpec {
    pub title: String,
    pub filters: Vec<FileFilter>,
}

impl Default for FileDialogSpec {
    fn default() -> Self {
        Self::statement("Select a file")
    }
}

impl FileDialogSpec {
    pub fn statement(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filters: STATEMENT_FILTERS.to_vec(),
        }
    }

    /// Filters as `(name, extensions)` pairs.
    pub fn filter_pairs(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.filters.iter().map(|f| (f.name, f.extensions)).collect()
    }

    /// Filters as `(name, extensions)` pairs, minus the catch-all group.
    ///
    /// For pickers that take `*` as a literal extension; with no catch-all
    /// the picker's own unfiltered view takes its place.
    pub fn filter_pairs_without_catch_all(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.filters
            .iter()
            .filter(|f| !f.is_catch_all())
            .map(|f| (f.name, f.extensions))
            .collect()
    }
}
