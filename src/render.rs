//! Tree renderer: depth-first walk producing one report line per widget.
//!
//! Tree shape is drawn with branch glyphs computed from a per-traversal
//! `(depth, last_child_mask)` pair. The mask records, per ancestor depth,
//! whether that ancestor is rendering its last surviving child; it is a
//! fixed-width integer, which bounds the exactly-supported depth (see
//! [`MAX_TREE_DEPTH`]).

use anyhow::Result;

use crate::diagnostic::{Diagnostic, Severity};
use crate::skip::SkipSet;
use crate::widget::Widget;

/// Maximum tree depth with exact branch bookkeeping.
///
/// The last-child mask holds one bit per ancestor depth. Trees deeper than
/// this reuse low mask bits, so branch glyphs below that depth may be wrong;
/// nothing else degrades. This is an accepted bound, not silently corrected.
pub const MAX_TREE_DEPTH: usize = u64::BITS as usize;

/// Leading marker on every line. A plain leading space would be eaten by
/// common log viewers, so a visually identical non-breaking space is used.
const LINE_MARKER: char = '\u{00a0}';
const GLYPH_TEE: char = '+';
const GLYPH_CORNER: char = '`';
const GLYPH_VERTICAL: char = '|';
const GLYPH_CONNECTOR: char = '-';

/// Walks a widget tree and appends report lines to a buffer.
pub(crate) struct TreeRenderer<'p> {
    pub skip: &'p SkipSet,
    pub diagnostics: &'p [Box<dyn Diagnostic>],
}

impl TreeRenderer<'_> {
    pub fn render(&self, out: &mut String, root: &dyn Widget) -> Result<()> {
        self.render_recursively(out, 0, 0, root)
    }

    fn render_recursively(
        &self,
        out: &mut String,
        depth: usize,
        last_child_mask: u64,
        widget: &dyn Widget,
    ) -> Result<()> {
        append_line_prefix(out, depth, last_child_mask);
        self.append_label(out, widget)?;
        out.push('\n');

        if !widget.is_container() {
            return Ok(());
        }

        let child_count = widget.child_count()?;
        let last_kept = self.last_kept_child_index(widget, child_count)?;
        let mut mask = last_child_mask;
        for index in 0..child_count {
            if Some(index) == last_kept {
                mask |= depth_bit(depth);
            }
            let child = widget.child_at(index)?;
            if !self.skip.should_skip(child) {
                self.render_recursively(out, depth + 1, mask, child)?;
            }
        }
        Ok(())
    }

    /// Index of the last child that survives the skip filter, scanning
    /// backward. `None` when every child is skipped; the mask bit for this
    /// depth then stays unset.
    fn last_kept_child_index(
        &self,
        widget: &dyn Widget,
        child_count: usize,
    ) -> Result<Option<usize>> {
        for index in (0..child_count).rev() {
            if !self.skip.should_skip(widget.child_at(index)?) {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Appends `TypeName { finding, finding }`, or the bare type name when no
    /// plugin produced a finding. Non-info findings carry a severity prefix.
    fn append_label(&self, out: &mut String, widget: &dyn Widget) -> Result<()> {
        out.push_str(widget.type_name());

        let mut has_findings = false;
        for diagnostic in self.diagnostics {
            for diagnosis in diagnostic.diagnose(widget)? {
                out.push_str(if has_findings { ", " } else { " { " });
                has_findings = true;
                if diagnosis.severity != Severity::Info {
                    out.push_str(&diagnosis.severity.to_string());
                    out.push(':');
                }
                out.push_str(&diagnosis.message);
            }
        }

        if has_findings {
            out.push_str(" }");
        }
        Ok(())
    }
}

fn depth_bit(depth: usize) -> u64 {
    // Shift amount wraps at the mask width; see MAX_TREE_DEPTH.
    1u64.wrapping_shl(depth as u32)
}

/// Appends the branch glyphs for one line.
///
/// One glyph per ancestor depth, single-space separated after the first:
/// the immediate parent draws `+` (more siblings follow) or a backtick corner
/// (last child); farther ancestors draw `|` while their branch continues and
/// a blank once it is closed. Depth 0 gets only the leading marker.
fn append_line_prefix(out: &mut String, depth: usize, last_child_mask: u64) {
    out.push(LINE_MARKER);
    if depth == 0 {
        return;
    }

    for ancestor in 0..depth {
        if ancestor > 0 {
            out.push(' ');
        }
        let last_child = last_child_mask & depth_bit(ancestor) != 0;
        let immediate_parent = ancestor == depth - 1;
        out.push(match (last_child, immediate_parent) {
            (true, true) => GLYPH_CORNER,
            (true, false) => ' ',
            (false, true) => GLYPH_TEE,
            (false, false) => GLYPH_VERTICAL,
        });
    }
    out.push(GLYPH_CONNECTOR);
}
