//! Probe configuration and the scan entry points.
//!
//! A [`Probe`] is an immutable, reusable scanner configuration: which widget
//! ids to skip and which diagnostic plugins annotate each line. Scans are
//! synchronous and read-only; all mutable traversal state lives inside one
//! call, so a `Probe` can serve concurrent scans from different threads.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::{self, Diagnostic, TextContentDiagnostic};
use crate::render::TreeRenderer;
use crate::skip::SkipSet;
use crate::widget::{Widget, WidgetId};

/// Report emitted for a missing root.
const NULL_SENTINEL: &str = "null";

/// Rejected probe configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max text length must be positive")]
    NonPositiveMaxTextLength,
}

/// Scans a widget hierarchy and pretty-prints it to a `String`.
pub struct Probe {
    skip: SkipSet,
    diagnostics: Vec<Box<dyn Diagnostic>>,
}

impl Probe {
    /// A probe with the default diagnostics and nothing skipped.
    pub fn new() -> Self {
        Self {
            skip: SkipSet::default(),
            diagnostics: diagnostic::default_set(TextContentDiagnostic::default()),
        }
    }

    /// A probe with the default diagnostics that ignores the given widget ids
    /// (and their subtrees). Useful to keep debug overlays out of the report.
    pub fn with_skipped_ids(ids: impl IntoIterator<Item = WidgetId>) -> Self {
        Self {
            skip: SkipSet::new(ids),
            diagnostics: diagnostic::default_set(TextContentDiagnostic::default()),
        }
    }

    pub fn builder() -> ProbeBuilder {
        ProbeBuilder::default()
    }

    /// Scans the hierarchy rooted at `root` and returns the report.
    ///
    /// A `None` root yields exactly the `null` sentinel. Otherwise the report
    /// starts with a `window-focus:<bool>` line followed by one line per
    /// visited widget. Any failure raised while querying the tree is caught
    /// here: the output produced so far is preserved and a diagnostic banner
    /// is inserted at the start of the report so it is visible even when the
    /// report is long.
    pub fn scan(&self, root: Option<&dyn Widget>) -> String {
        let mut report = String::new();
        self.scan_into(&mut report, root);
        report
    }

    /// Like [`Probe::scan`], appending to a caller-supplied buffer.
    ///
    /// On failure the banner is inserted where this scan's output began;
    /// earlier buffer content is untouched.
    pub fn scan_into(&self, out: &mut String, root: Option<&dyn Widget>) {
        let scan_start = out.len();
        if let Err(err) = self.try_scan(out, root) {
            tracing::warn!("widget hierarchy scan aborted: {err:#}");
            let banner = format!("Exception when going through view hierarchy: {err}\n");
            out.insert_str(scan_start, &banner);
        }
    }

    fn try_scan(&self, out: &mut String, root: Option<&dyn Widget>) -> anyhow::Result<()> {
        let Some(root) = root else {
            out.push_str(NULL_SENTINEL);
            return Ok(());
        };

        out.push_str("window-focus:");
        out.push_str(if root.has_window_focus()? {
            "true"
        } else {
            "false"
        });
        out.push('\n');

        let renderer = TreeRenderer {
            skip: &self.skip,
            diagnostics: &self.diagnostics,
        };
        renderer.render(out, root)
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("skipped_ids", &self.skip.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Builds a [`Probe`].
///
/// Starts from the default diagnostic set; [`ProbeBuilder::clear_diagnostics`]
/// drops it (and any plugins added so far) for callers that want full control
/// over the plugin list.
pub struct ProbeBuilder {
    skipped_ids: Vec<WidgetId>,
    extra_diagnostics: Vec<Box<dyn Diagnostic>>,
    use_defaults: bool,
    show_text_content: bool,
    max_text_length: usize,
}

impl Default for ProbeBuilder {
    fn default() -> Self {
        Self {
            skipped_ids: Vec::new(),
            extra_diagnostics: Vec::new(),
            use_defaults: true,
            show_text_content: false,
            max_text_length: usize::MAX,
        }
    }
}

impl ProbeBuilder {
    /// Widget ids whose subtrees are excluded from the report.
    pub fn skipped_ids(mut self, ids: impl IntoIterator<Item = WidgetId>) -> Self {
        self.skipped_ids = ids.into_iter().collect();
        self
    }

    /// Drops the default diagnostics and any added so far.
    pub fn clear_diagnostics(mut self) -> Self {
        self.use_defaults = false;
        self.extra_diagnostics.clear();
        self
    }

    /// Appends a diagnostic plugin after the current list.
    pub fn diagnostic(mut self, diagnostic: impl Diagnostic + 'static) -> Self {
        self.extra_diagnostics.push(Box::new(diagnostic));
        self
    }

    /// Whether the default text diagnostic prints literal text content.
    pub fn show_text_content(mut self, show: bool) -> Self {
        self.show_text_content = show;
        self
    }

    /// Truncation threshold for printed text content. Must be positive;
    /// validated by [`ProbeBuilder::build`].
    pub fn max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    pub fn build(self) -> Result<Probe, ConfigError> {
        // Validated even when the default text plugin is cleared, so a bad
        // configuration never builds.
        if self.max_text_length == 0 {
            return Err(ConfigError::NonPositiveMaxTextLength);
        }

        let mut diagnostics = if self.use_defaults {
            let text = TextContentDiagnostic::new(self.show_text_content, self.max_text_length)?;
            diagnostic::default_set(text)
        } else {
            Vec::new()
        };
        diagnostics.extend(self.extra_diagnostics);

        Ok(Probe {
            skip: SkipSet::new(self.skipped_ids),
            diagnostics,
        })
    }
}
