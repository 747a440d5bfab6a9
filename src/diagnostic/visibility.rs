//! Reports non-visible widget states.

use crate::widget::{Visibility, Widget};

use super::{Diagnosis, Diagnostic};

/// Emits `GONE` or `INVISIBLE`; visible widgets get no finding.
pub struct VisibilityDiagnostic;

impl Diagnostic for VisibilityDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        let message = match widget.visibility()? {
            Visibility::Gone => "GONE",
            Visibility::Invisible => "INVISIBLE",
            Visibility::Visible => return Ok(Vec::new()),
        };
        Ok(vec![Diagnosis::info(message, widget)])
    }
}
