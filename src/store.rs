//! The live weekly schedule and its persistence.
//!
//! `ScheduleStore` is the only owner of the [`Schedule`]. Readers get a shared
//! borrow; every change goes through [`ScheduleStore::toggle_exercise`] or
//! [`ScheduleStore::add_exercise`], which build the next schedule from a copy
//! and commit it to storage before returning.

use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::{DaySchedule, Exercise, Schedule};
use crate::routines::{default_schedule, parse_schedule, serialize_schedule, today_name};
use crate::storage::{KeyValueStore, SCHEDULE_KEY};

pub struct ScheduleStore<S: KeyValueStore> {
    schedule: Schedule,
    today: String,
    storage: S,
}

impl<S: KeyValueStore> ScheduleStore<S> {
    /// Load the saved schedule, highlighting today's weekday from the local clock.
    pub fn initialize(storage: S) -> Self {
        Self::open(storage, today_name())
    }

    /// Load the saved schedule, or the default one when nothing usable is stored.
    ///
    /// A failed read or a malformed value falls back to the default schedule.
    /// The stored value is left alone until the next change is committed.
    pub fn open(storage: S, today: &str) -> Self {
        let schedule = match storage.get(SCHEDULE_KEY) {
            Ok(Some(saved)) => match parse_schedule(&saved) {
                Ok(schedule) => {
                    info!("loaded saved schedule ({} days)", schedule.len());
                    schedule
                }
                Err(e) => {
                    warn!("{}; using default schedule", e);
                    default_schedule()
                }
            },
            Ok(None) => {
                info!("no saved schedule, using default");
                default_schedule()
            }
            Err(e) => {
                warn!("failed to read saved schedule: {}; using default schedule", e);
                default_schedule()
            }
        };

        ScheduleStore {
            schedule,
            today: today.to_string(),
            storage,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn day(&self, index: usize) -> Option<&DaySchedule> {
        self.schedule.get(index)
    }

    pub fn today(&self) -> &str {
        &self.today
    }

    pub fn is_today(&self, day: &DaySchedule) -> bool {
        day.day == self.today
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Flip the completion flag of one exercise.
    ///
    /// Returns `Ok(false)` without touching storage when the day index or the
    /// id matches nothing.
    pub fn toggle_exercise(&mut self, day_index: usize, exercise_id: &str) -> Result<bool, PlannerError> {
        let position = match self.schedule.get(day_index) {
            Some(day) => day.exercises.iter().position(|e| e.id == exercise_id),
            None => None,
        };
        let Some(position) = position else {
            debug!("toggle ignored: no exercise {} on day {}", exercise_id, day_index);
            return Ok(false);
        };

        let mut next = self.schedule.clone();
        let day = &mut next[day_index];
        let exercise = &mut day.exercises[position];
        exercise.completed = !exercise.completed;
        debug!(
            "{} on {} marked {}",
            exercise.name,
            day.day,
            if exercise.completed { "done" } else { "pending" }
        );

        self.commit(next)?;
        Ok(true)
    }

    /// Append a new exercise to the end of the named day.
    ///
    /// Blank name, sets or reps, or an unknown day, is a no-op returning
    /// `Ok(false)`. Rest days accept exercises like any other day.
    pub fn add_exercise(&mut self, day: &str, name: &str, sets: &str, reps: &str) -> Result<bool, PlannerError> {
        if [name, sets, reps].iter().any(|field| field.trim().is_empty()) {
            debug!("add ignored: missing name, sets or reps");
            return Ok(false);
        }
        let Some(day_index) = self.schedule.iter().position(|d| d.day == day) else {
            debug!("add ignored: unknown day {}", day);
            return Ok(false);
        };

        let mut next = self.schedule.clone();
        let target = &mut next[day_index];
        let id = fresh_id(target);
        target.exercises.push(Exercise::new(&id, name, sets, reps));
        info!("added {} to {}", name, day);

        self.commit(next)?;
        Ok(true)
    }

    pub fn total_exercise_count(&self) -> usize {
        self.schedule.iter().map(|d| d.exercises.len()).sum()
    }

    pub fn completed_exercise_count(&self) -> usize {
        self.schedule.iter().map(DaySchedule::completed_count).sum()
    }

    pub fn workout_day_count(&self) -> usize {
        self.schedule.iter().filter(|d| !d.is_rest_day).count()
    }

    // The in-memory schedule is replaced even if the write fails.
    fn commit(&mut self, next: Schedule) -> Result<(), PlannerError> {
        self.schedule = next;
        let json = serialize_schedule(&self.schedule)?;
        self.storage.set(SCHEDULE_KEY, &json)
    }
}

fn fresh_id(day: &DaySchedule) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !day.contains_id(&id) {
            return id;
        }
    }
}
