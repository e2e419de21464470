//! Column widths of the console output

use crate::config::ERROR_MARKER;

/// Column widths shared by every output line of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub name_width: usize,
    pub version_width: usize,
}

impl Layout {
    /// Computes the layout from `(name, installed version)` pairs of the checked tools
    ///
    /// The version column is never narrower than the error marker.
    pub fn compute<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut layout = Self {
            name_width: 0,
            version_width: ERROR_MARKER.chars().count(),
        };
        for (name, installed) in entries {
            layout.name_width = layout.name_width.max(name.chars().count());
            layout.version_width = layout.version_width.max(installed.chars().count());
        }
        layout
    }

    /// Renders the name and version columns padded to their widths
    pub fn columns(&self, name: &str, version: &str) -> String {
        format!(
            "{:<name_width$} {:<version_width$}",
            name,
            version,
            name_width = self.name_width,
            version_width = self.version_width
        )
    }
}
