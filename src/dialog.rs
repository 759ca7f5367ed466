//! State behind the add-exercise dialog. Opening and closing it never
//! touches the schedule; only [`AddExerciseDialog::submit`] does.

use crate::error::PlannerError;
use crate::storage::KeyValueStore;
use crate::store::ScheduleStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    pub name: String,
    pub sets: String,
    pub reps: String,
}

#[derive(Debug, Default)]
pub struct AddExerciseDialog {
    pub form: ExerciseForm,
    selected_day: Option<String>,
}

impl AddExerciseDialog {
    pub fn open(&mut self, day: &str) {
        self.selected_day = Some(day.to_string());
    }

    /// Hide the dialog. Typed values stay for the next open.
    pub fn close(&mut self) {
        self.selected_day = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected_day.is_some()
    }

    pub fn selected_day(&self) -> Option<&str> {
        self.selected_day.as_deref()
    }

    /// Add the typed exercise to the selected day.
    ///
    /// On success the form is cleared and the dialog closes. A rejected add
    /// leaves both as they were so the user can fix the input.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut ScheduleStore<S>) -> Result<bool, PlannerError> {
        let Some(day) = self.selected_day.clone() else {
            return Ok(false);
        };
        let added = store.add_exercise(&day, &self.form.name, &self.form.sets, &self.form.reps);
        if !matches!(added, Ok(false)) {
            self.form = ExerciseForm::default();
            self.close();
        }
        added
    }
}
