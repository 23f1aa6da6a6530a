use crate::units::Unit;
use serde::Serialize;
use std::collections::BTreeMap;

/// Live contents of one input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    pub text: String,
    /// Selection offset in characters, always <= text length
    pub cursor: usize,
}

/// The four linked fields, keyed by unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    fields: BTreeMap<Unit, Field>,
    focused: Option<Unit>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self {
            fields: Unit::ALL.into_iter().map(|u| (u, Field::default())).collect(),
            focused: None,
        }
    }

    pub fn field(&self, unit: Unit) -> &Field {
        // Every unit is inserted in new()
        &self.fields[&unit]
    }

    pub fn text(&self, unit: Unit) -> &str {
        &self.field(unit).text
    }

    /// Replace the text, clamping the cursor into the new length
    pub fn set_text(&mut self, unit: Unit, text: &str) {
        if let Some(field) = self.fields.get_mut(&unit) {
            field.text = text.to_string();
            field.cursor = field.cursor.min(text.chars().count());
        }
    }

    pub fn set_cursor(&mut self, unit: Unit, offset: usize) {
        if let Some(field) = self.fields.get_mut(&unit) {
            field.cursor = offset.min(field.text.chars().count());
        }
    }

    pub fn focused(&self) -> Option<Unit> {
        self.focused
    }

    pub fn set_focus(&mut self, unit: Option<Unit>) {
        self.focused = unit;
    }

    /// (unit, text) pairs in field order
    pub fn texts(&self) -> Vec<(Unit, String)> {
        self.fields
            .iter()
            .map(|(u, f)| (*u, f.text.clone()))
            .collect()
    }
}
