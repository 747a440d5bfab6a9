//! Reports the widget's resolved identifier name.

use crate::widget::Widget;

use super::{Diagnosis, Diagnostic};

/// Emits `id:<resolved-name>` for widgets with a resolvable identifier.
///
/// Name resolution failures are swallowed: an id that cannot be resolved
/// contributes no finding and does not abort the scan.
pub struct IdDiagnostic;

impl Diagnostic for IdDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        if widget.id().is_none() {
            return Ok(Vec::new());
        }
        match widget.resolve_id_name() {
            Ok(name) => Ok(vec![Diagnosis::info(format!("id:{name}"), widget)]),
            Err(_) => Ok(Vec::new()),
        }
    }
}
