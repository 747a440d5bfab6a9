//! Synthetic widget tree fixture shared by the integration tests.

#![allow(dead_code)]

use anyhow::{anyhow, bail, Result};
use viewprobe::{CheckableWidget, TextWidget, Visibility, Widget, WidgetId};

/// In-memory widget with builder-style setup, owning its children.
#[derive(Debug, Clone)]
pub struct FakeWidget {
    type_name: String,
    id: Option<WidgetId>,
    id_name: Option<String>,
    width: u32,
    height: u32,
    visibility: Visibility,
    focused: bool,
    enabled: bool,
    selected: bool,
    window_focus: bool,
    container: bool,
    children: Vec<FakeWidget>,
    text_capable: bool,
    text: Option<String>,
    input_target: bool,
    checked: Option<bool>,
    enabled_failure: Option<String>,
}

impl FakeWidget {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_owned(),
            id: None,
            id_name: None,
            width: 0,
            height: 0,
            visibility: Visibility::Visible,
            focused: false,
            enabled: true,
            selected: false,
            window_focus: false,
            container: false,
            children: Vec::new(),
            text_capable: false,
            text: None,
            input_target: false,
            checked: None,
            enabled_failure: None,
        }
    }

    pub fn container(type_name: &str, children: Vec<FakeWidget>) -> Self {
        let mut widget = Self::new(type_name);
        widget.container = true;
        widget.children = children;
        widget
    }

    /// An identifier that resolves to `name`.
    pub fn with_id(mut self, id: u32, name: &str) -> Self {
        self.id = Some(WidgetId(id));
        self.id_name = Some(name.to_owned());
        self
    }

    /// An identifier whose name resolution fails.
    pub fn with_unresolvable_id(mut self, id: u32) -> Self {
        self.id = Some(WidgetId(id));
        self.id_name = None;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn with_window_focus(mut self) -> Self {
        self.window_focus = true;
        self
    }

    /// Text-bearing, holding `text`.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_capable = true;
        self.text = Some(text.to_owned());
        self
    }

    /// Text-bearing, but with no text at all.
    pub fn text_capable(mut self) -> Self {
        self.text_capable = true;
        self
    }

    pub fn input_target(mut self) -> Self {
        self.input_target = true;
        self
    }

    /// Checkable, in the given state.
    pub fn checkable(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Makes the enablement query fail with `message`.
    pub fn failing_enabled(mut self, message: &str) -> Self {
        self.enabled_failure = Some(message.to_owned());
        self
    }

    /// Total number of widgets in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FakeWidget::node_count)
            .sum::<usize>()
    }
}

impl Widget for FakeWidget {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn width(&self) -> Result<u32> {
        Ok(self.width)
    }

    fn height(&self) -> Result<u32> {
        Ok(self.height)
    }

    fn id(&self) -> Option<WidgetId> {
        self.id
    }

    fn resolve_id_name(&self) -> Result<String> {
        match &self.id_name {
            Some(name) => Ok(name.clone()),
            None => bail!("no name registered for id"),
        }
    }

    fn visibility(&self) -> Result<Visibility> {
        Ok(self.visibility)
    }

    fn is_focused(&self) -> Result<bool> {
        Ok(self.focused)
    }

    fn is_enabled(&self) -> Result<bool> {
        match &self.enabled_failure {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(self.enabled),
        }
    }

    fn is_selected(&self) -> Result<bool> {
        Ok(self.selected)
    }

    fn has_window_focus(&self) -> Result<bool> {
        Ok(self.window_focus)
    }

    fn is_container(&self) -> bool {
        self.container
    }

    fn child_count(&self) -> Result<usize> {
        Ok(self.children.len())
    }

    fn child_at(&self, index: usize) -> Result<&dyn Widget> {
        self.children
            .get(index)
            .map(|child| child as &dyn Widget)
            .ok_or_else(|| anyhow!("no child at index {index}"))
    }

    fn as_text(&self) -> Option<&dyn TextWidget> {
        if self.text_capable {
            Some(self)
        } else {
            None
        }
    }

    fn as_checkable(&self) -> Option<&dyn CheckableWidget> {
        self.checked.map(|_| self as &dyn CheckableWidget)
    }
}

impl TextWidget for FakeWidget {
    fn text(&self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn is_input_target(&self) -> Result<bool> {
        Ok(self.input_target)
    }
}

impl CheckableWidget for FakeWidget {
    fn is_checked(&self) -> Result<bool> {
        Ok(self.checked.unwrap_or(false))
    }
}
