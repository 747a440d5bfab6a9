//! Capability interface the scanner requires from a tree node.
//!
//! The engine never owns, retains, or mutates widgets; every scan borrows the
//! tree for the duration of the call. Hosts adapt their toolkit's node type by
//! implementing [`Widget`], plus [`TextWidget`] / [`CheckableWidget`] for nodes
//! that carry those capabilities.
//!
//! Live-state queries return `anyhow::Result` because the inspected tree may
//! be corrupted or adversarial; a failing query aborts the rest of the
//! traversal and is surfaced by the scan wrapper, never panics.

use std::fmt;

use anyhow::{bail, Result};

/// Opaque widget identifier, as assigned by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state widget visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Not drawn, but still occupies layout space.
    Invisible,
    /// Not drawn and occupies no layout space.
    Gone,
}

/// One node of the inspected hierarchy.
///
/// Only `type_name`, `width`, and `height` are mandatory; everything else has
/// a neutral default so minimal adapters stay short. Capability hooks
/// (`as_text`, `as_checkable`) return `None` for nodes that do not carry the
/// capability.
pub trait Widget {
    /// Short type name shown at the start of the node's report line.
    fn type_name(&self) -> &str;

    fn width(&self) -> Result<u32>;

    fn height(&self) -> Result<u32>;

    /// The widget's identifier, if it has one.
    fn id(&self) -> Option<WidgetId> {
        None
    }

    /// Resolves the identifier to a human-readable name.
    ///
    /// Only meaningful when [`Widget::id`] returns `Some`; name lookup may
    /// fail (e.g. the id is not registered with the host's resource table).
    fn resolve_id_name(&self) -> Result<String> {
        bail!("widget has no resolvable identifier")
    }

    fn visibility(&self) -> Result<Visibility> {
        Ok(Visibility::Visible)
    }

    fn is_focused(&self) -> Result<bool> {
        Ok(false)
    }

    fn is_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    fn is_selected(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether the window this widget belongs to currently holds input focus.
    ///
    /// Queried on root widgets only.
    fn has_window_focus(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether this widget can hold children.
    fn is_container(&self) -> bool {
        false
    }

    fn child_count(&self) -> Result<usize> {
        Ok(0)
    }

    /// Borrow the child at `index`. Children are owned by their parent.
    fn child_at(&self, index: usize) -> Result<&dyn Widget> {
        bail!("widget has no child at index {index}")
    }

    /// Text capability, for widgets that carry text content.
    fn as_text(&self) -> Option<&dyn TextWidget> {
        None
    }

    /// Checkable capability, for widgets with a checked state.
    fn as_checkable(&self) -> Option<&dyn CheckableWidget> {
        None
    }
}

/// Capability of text-bearing widgets.
pub trait TextWidget {
    /// Current text content; `None` when the widget holds no text at all.
    fn text(&self) -> Result<Option<String>>;

    /// Whether this widget is the active input-method target.
    fn is_input_target(&self) -> Result<bool> {
        Ok(false)
    }
}

/// Capability of widgets with a checked state.
pub trait CheckableWidget {
    fn is_checked(&self) -> Result<bool>;
}
