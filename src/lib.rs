//! Viewprobe - widget hierarchy inspection for debugging.
//!
//! Viewprobe scans a live, in-process widget tree and pretty-prints it as a
//! text report: one line per widget, indented with branch glyphs reflecting
//! the tree shape, annotated with per-widget diagnostic findings (identifier,
//! size, visibility, focus, enablement, selection, text content, checked
//! state). The report is meant for engineers inspecting a running UI from
//! logs or test failures, without a debugger or screenshot.
//!
//! # Architecture
//!
//! - `widget`: the capability interface adapters implement for their toolkit
//! - `skip`: exclusion of configured widget ids and their subtrees
//! - `diagnostic`: pluggable per-widget analyzers producing findings
//! - `render`: the depth-first walk and branch-glyph line prefixes
//! - `probe`: configuration plus the failure-containing scan entry points
//! - `windows`: best-effort enumeration of all top-level roots
//!
//! Scans never mutate the inspected tree. A failure raised anywhere while
//! querying the tree aborts the rest of the traversal but keeps everything
//! rendered so far, with the failure message inserted at the top of the
//! report; partial output is worth more to a debugging engineer than a
//! clean error.
//!
//! # Example
//!
//! ```
//! use viewprobe::{Probe, Widget};
//!
//! struct Label;
//!
//! impl Widget for Label {
//!     fn type_name(&self) -> &str {
//!         "Label"
//!     }
//!
//!     fn width(&self) -> anyhow::Result<u32> {
//!         Ok(320)
//!     }
//!
//!     fn height(&self) -> anyhow::Result<u32> {
//!         Ok(48)
//!     }
//! }
//!
//! let report = Probe::new().scan(Some(&Label));
//! assert_eq!(report, "window-focus:false\n\u{a0}Label { 320x48px }\n");
//! ```

pub mod diagnostic;
pub mod probe;
pub mod render;
pub mod skip;
pub mod widget;
pub mod windows;

pub use diagnostic::{
    CheckedDiagnostic, Diagnosis, Diagnostic, DimensionDiagnostic, DisabledDiagnostic,
    FocusedDiagnostic, IdDiagnostic, SelectedDiagnostic, Severity, TextContentDiagnostic,
    VisibilityDiagnostic,
};
pub use probe::{ConfigError, Probe, ProbeBuilder};
pub use render::MAX_TREE_DEPTH;
pub use skip::SkipSet;
pub use widget::{CheckableWidget, TextWidget, Visibility, Widget, WidgetId};
pub use windows::{RootEnumerator, RootWindow};
