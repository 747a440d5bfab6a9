//! Diagnostic plugins: per-node analyzers that annotate report lines.
//!
//! A plugin examines one widget and returns zero or more [`Diagnosis`]
//! findings. Plugins are independent of each other; their order in the
//! configured list is the left-to-right order of findings on the line. A
//! plugin that does not apply to a widget's capabilities returns an empty
//! list, never an error; errors are reserved for failing widget queries and
//! abort the traversal at the scan boundary.

mod dimension;
mod id;
mod state;
mod text;
mod visibility;

pub use dimension::DimensionDiagnostic;
pub use id::IdDiagnostic;
pub use state::{CheckedDiagnostic, DisabledDiagnostic, FocusedDiagnostic, SelectedDiagnostic};
pub use text::TextContentDiagnostic;
pub use visibility::VisibilityDiagnostic;

use std::fmt;

use crate::widget::Widget;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One finding about a widget.
///
/// The widget back-reference is informational only; the engine never reads it
/// back and nothing is retained past assembling the report line.
pub struct Diagnosis<'w> {
    pub severity: Severity,
    pub message: String,
    pub widget: &'w dyn Widget,
}

impl<'w> Diagnosis<'w> {
    pub fn new(severity: Severity, message: impl Into<String>, widget: &'w dyn Widget) -> Self {
        Self {
            severity,
            message: message.into(),
            widget,
        }
    }

    pub fn info(message: impl Into<String>, widget: &'w dyn Widget) -> Self {
        Self::new(Severity::Info, message, widget)
    }
}

impl fmt::Debug for Diagnosis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnosis")
            .field("severity", &self.severity)
            .field("message", &self.message)
            .field("widget", &self.widget.type_name())
            .finish()
    }
}

/// Analyzes one widget and returns findings about it.
///
/// Implementations are stateless across calls except for configuration fixed
/// at construction time.
pub trait Diagnostic: Send + Sync {
    /// Examines the widget and returns informations, warnings, and errors.
    ///
    /// Returns an empty list when the plugin does not apply. A returned error
    /// means a widget query failed; it aborts the remainder of the traversal
    /// and is contained by the scan wrapper.
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>>;
}

/// The built-in plugin list, in default order.
pub(crate) fn default_set(text: TextContentDiagnostic) -> Vec<Box<dyn Diagnostic>> {
    vec![
        Box::new(IdDiagnostic),
        Box::new(VisibilityDiagnostic),
        Box::new(DimensionDiagnostic),
        Box::new(FocusedDiagnostic),
        Box::new(DisabledDiagnostic),
        Box::new(SelectedDiagnostic),
        Box::new(text),
        Box::new(CheckedDiagnostic),
    ]
}
