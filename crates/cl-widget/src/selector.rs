use cl_model::{Level, LocationError, OptionRecord, Result};

/// Visible options of one select control and its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    level: Level,
    visible: Vec<OptionRecord>,
    selected: Option<String>,
}

impl SelectorState {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            visible: Vec::new(),
            selected: None,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn visible(&self) -> &[OptionRecord] {
        &self.visible
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_record(&self) -> Option<&OptionRecord> {
        let selected = self.selected.as_deref()?;
        self.visible.iter().find(|record| record.value == selected)
    }

    /// Replace the visible list wholesale; the first option becomes selected.
    pub(crate) fn replace(&mut self, options: Vec<OptionRecord>) {
        self.selected = options.first().map(|record| record.value.clone());
        self.visible = options;
    }

    /// Show `options` without selecting any of them.
    pub(crate) fn show_unselected(&mut self, options: Vec<OptionRecord>) {
        self.visible = options;
        self.selected = None;
    }

    pub(crate) fn set_selected(&mut self, value: Option<String>) {
        self.selected = value;
    }

    pub(crate) fn clear(&mut self) {
        self.visible.clear();
        self.selected = None;
    }

    /// Select one of the visible options.
    pub fn select(&mut self, value: &str) -> Result<()> {
        if !self.visible.iter().any(|record| record.value == value) {
            return Err(LocationError::NotVisible {
                level: self.level,
                value: value.to_string(),
            });
        }
        self.selected = Some(value.to_string());
        Ok(())
    }
}
