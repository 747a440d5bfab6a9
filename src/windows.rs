//! Root enumeration boundary: scanning every top-level window at once.
//!
//! Finding the root widgets of a running process is toolkit- and
//! platform-specific (typically a best-effort reflective lookup into a
//! private window registry), so it lives entirely behind [`RootEnumerator`].
//! The engine itself has no platform dependency and is fully testable with
//! synthetic trees.

use crate::probe::Probe;
use crate::widget::Widget;

/// One top-level surface: a root widget, optionally paired with a display
/// title.
pub struct RootWindow<'a> {
    pub title: Option<String>,
    pub root: &'a dyn Widget,
}

/// Supplies the root widgets of all currently displayed top-level surfaces.
///
/// Implementations are best-effort: when the underlying registry cannot be
/// reached they should return an empty list or an error. The caller treats
/// both as "nothing to scan" and never propagates the failure.
pub trait RootEnumerator {
    fn roots(&self) -> anyhow::Result<Vec<RootWindow<'_>>>;
}

impl Probe {
    /// Scans every root supplied by `windows`, one titled section per root.
    ///
    /// Sections are separated by a blank line and headed by `<title>:`, where
    /// a missing title falls back to the root widget's type name. Each
    /// section is a full contained scan, so a failure in one window's tree
    /// does not affect the others. An unavailable or failing enumerator
    /// yields an empty report.
    pub fn scan_all_windows(&self, windows: &dyn RootEnumerator) -> String {
        let roots = match windows.roots() {
            Ok(roots) => roots,
            Err(err) => {
                tracing::debug!("root enumeration unavailable: {err:#}");
                Vec::new()
            }
        };

        let mut report = String::new();
        for window in roots {
            if !report.is_empty() {
                report.push('\n');
            }
            let title = window
                .title
                .unwrap_or_else(|| window.root.type_name().to_owned());
            report.push_str(&title);
            report.push_str(":\n");
            self.scan_into(&mut report, Some(window.root));
        }
        report
    }
}
