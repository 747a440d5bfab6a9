//! Boolean state diagnostics: focus, enablement, selection, checked state.

use crate::widget::Widget;

use super::{Diagnosis, Diagnostic};

/// Emits `focused` for the widget holding focus.
pub struct FocusedDiagnostic;

impl Diagnostic for FocusedDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        if widget.is_focused()? {
            Ok(vec![Diagnosis::info("focused", widget)])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Emits `disabled` for widgets that are not enabled.
pub struct DisabledDiagnostic;

impl Diagnostic for DisabledDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        if widget.is_enabled()? {
            Ok(Vec::new())
        } else {
            Ok(vec![Diagnosis::info("disabled", widget)])
        }
    }
}

/// Emits `selected` for selected widgets.
pub struct SelectedDiagnostic;

impl Diagnostic for SelectedDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        if widget.is_selected()? {
            Ok(vec![Diagnosis::info("selected", widget)])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Emits `checked` for checkable widgets in the checked state.
///
/// Widgets without the checkable capability get no finding.
pub struct CheckedDiagnostic;

impl Diagnostic for CheckedDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        let Some(checkable) = widget.as_checkable() else {
            return Ok(Vec::new());
        };
        if checkable.is_checked()? {
            Ok(vec![Diagnosis::info("checked", widget)])
        } else {
            Ok(Vec::new())
        }
    }
}
