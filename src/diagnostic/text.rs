//! Text content diagnostics for text-bearing widgets.

use crate::probe::ConfigError;
use crate::widget::Widget;

use super::{Diagnosis, Diagnostic};

const ELLIPSIS: char = '\u{2026}';

/// Reports text facts for widgets with the text capability.
///
/// Always emits `text-length:<n>` when text is present (the untruncated
/// length, even when the content finding is clipped). With `show_content`
/// enabled it additionally emits `text:"<content>"`, truncated to
/// `max_length - 1` characters plus one ellipsis when the content is longer
/// than `max_length`. Emits `ime-target` when the widget is the active
/// input-method target.
pub struct TextContentDiagnostic {
    show_content: bool,
    max_length: usize,
}

impl Default for TextContentDiagnostic {
    fn default() -> Self {
        Self {
            show_content: false,
            max_length: usize::MAX,
        }
    }
}

impl TextContentDiagnostic {
    /// Creates a text diagnostic. `max_length` must be positive.
    pub fn new(show_content: bool, max_length: usize) -> Result<Self, ConfigError> {
        if max_length == 0 {
            return Err(ConfigError::NonPositiveMaxTextLength);
        }
        Ok(Self {
            show_content,
            max_length,
        })
    }

    fn clipped(&self, text: &str, length: usize) -> String {
        if length <= self.max_length {
            return text.to_owned();
        }
        let mut clipped: String = text.chars().take(self.max_length - 1).collect();
        clipped.push(ELLIPSIS);
        clipped
    }
}

impl Diagnostic for TextContentDiagnostic {
    fn diagnose<'w>(&self, widget: &'w dyn Widget) -> anyhow::Result<Vec<Diagnosis<'w>>> {
        let Some(text_widget) = widget.as_text() else {
            return Ok(Vec::new());
        };

        let mut diagnoses = Vec::new();
        if let Some(text) = text_widget.text()? {
            let length = text.chars().count();
            diagnoses.push(Diagnosis::info(format!("text-length:{length}"), widget));
            if self.show_content {
                let content = self.clipped(&text, length);
                diagnoses.push(Diagnosis::info(format!("text:\"{content}\""), widget));
            }
        }

        if text_widget.is_input_target()? {
            diagnoses.push(Diagnosis::info("ime-target", widget));
        }

        Ok(diagnoses)
    }
}
