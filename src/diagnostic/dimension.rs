//! Reports widget dimensions.

use crate::widget::Widget;

use super::{Diagnosis, Diagnostic};

/// Always emits `<width>x<height>px`.
pub struct DimensionDiagnostic;

impl Diagnostic for DimensionDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        let width = widget.width()?;
        let height = widget.height()?;
        Ok(vec![Diagnosis::info(
            format!("{width}x{height}px"),
            widget,
        )])
    }
}
