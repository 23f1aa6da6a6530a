use crate::locale::{InputKind, LocaleFormat};
use crate::sync::fields::FieldState;
use crate::sync::guard::SyncGuard;
use crate::units::{convert, Conversion, Unit};
use serde::Serialize;
use std::cell::{Cell, RefCell};

/// Widget side of the screen.
///
/// Implementations may deliver a change event back into the synchronizer from
/// inside `set_text`; such calls are rejected by the guard.
pub trait FieldView {
    fn set_text(&mut self, unit: Unit, text: &str);

    fn set_cursor(&mut self, _unit: Unit, _offset: usize) {}
}

/// View that ignores writes, for callers that only read the synchronizer's state
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl FieldView for NullView {
    fn set_text(&mut self, _unit: Unit, _text: &str) {}
}

/// One replacement of a derived field's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWrite {
    pub unit: Unit,
    pub text: String,
    /// Restored selection, only set when the written field has focus
    pub cursor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SyncOutcome {
    /// A pass was already running
    Skipped,
    /// Text could not be read as a number; nothing was written
    Ignored,
    /// Writes actually made, empty when every field already matched
    Updated { writes: Vec<FieldWrite> },
}

/// Keeps the four unit fields consistent with whichever one the user edits
pub struct Synchronizer {
    locale: LocaleFormat,
    state: RefCell<FieldState>,
    syncing: Cell<bool>,
}

impl Synchronizer {
    pub fn new(locale: LocaleFormat) -> Self {
        Self {
            locale,
            state: RefCell::new(FieldState::new()),
            syncing: Cell::new(false),
        }
    }

    pub fn locale(&self) -> &LocaleFormat {
        &self.locale
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    pub fn field_text(&self, unit: Unit) -> String {
        self.state.borrow().text(unit).to_string()
    }

    /// Snapshot of all four fields
    pub fn state(&self) -> FieldState {
        self.state.borrow().clone()
    }

    pub fn set_focus(&self, unit: Option<Unit>) {
        self.state.borrow_mut().set_focus(unit);
    }

    pub fn set_cursor(&self, unit: Unit, offset: usize) {
        self.state.borrow_mut().set_cursor(unit, offset);
    }

    /// Handle a text change on `unit`'s field.
    ///
    /// The source field is recorded but never written. Unparsable text leaves the
    /// other fields as they are; incomplete decimals ("1.", ",") count as zero.
    pub fn on_text_changed(&self, unit: Unit, text: &str, view: &mut dyn FieldView) -> SyncOutcome {
        let _guard = match SyncGuard::try_acquire(&self.syncing) {
            Some(guard) => guard,
            None => {
                log::trace!("Ignoring re-entrant change on {} ({:?})", unit, text);
                return SyncOutcome::Skipped;
            }
        };

        self.state.borrow_mut().set_text(unit, text);

        let value = match self.locale.classify_input(text) {
            InputKind::Number(v) => v,
            InputKind::Incomplete => 0.0,
            InputKind::Unparsable => {
                log::debug!("Unparsable input {:?} in {} field, leaving fields as-is", text, unit);
                return SyncOutcome::Ignored;
            }
        };

        let writes = self.apply(unit, &convert(value, unit));
        log::debug!(
            "{} {:?} -> {} ({} field(s) rewritten)",
            unit,
            text,
            value,
            writes.len()
        );

        // State borrow is released, so the view may call back in
        for write in &writes {
            view.set_text(write.unit, &write.text);
            if let Some(cursor) = write.cursor {
                view.set_cursor(write.unit, cursor);
            }
        }

        SyncOutcome::Updated { writes }
    }

    /// Format the derived values into the other three fields, returning the
    /// writes whose text differs from what was shown
    fn apply(&self, source: Unit, conversion: &Conversion) -> Vec<FieldWrite> {
        let mut state = self.state.borrow_mut();
        let mut writes = Vec::with_capacity(3);

        for target in source.others() {
            let text = self.locale.format_value(conversion.get(target));
            if state.text(target) == text {
                continue;
            }

            let had_focus = state.focused() == Some(target);
            let previous_cursor = state.field(target).cursor;
            state.set_text(target, &text);

            let cursor = if had_focus {
                let clamped = previous_cursor.min(text.chars().count());
                state.set_cursor(target, clamped);
                Some(clamped)
            } else {
                None
            };

            writes.push(FieldWrite {
                unit: target,
                text,
                cursor,
            });
        }

        writes
    }
}
