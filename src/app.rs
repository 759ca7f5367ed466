use eframe::{App, Frame, egui};
use egui::{Align2, Color32, RichText, ScrollArea, Stroke, Ui};
use log::error;

use crate::dialog::AddExerciseDialog;
use crate::display::{completion_ratio, day_badge, dialog_title, exercise_summary, REST_MESSAGE};
use crate::storage::KeyValueStore;
use crate::store::ScheduleStore;

const CARD_WIDTH: f32 = 220.0;
const TODAY_COLOR: Color32 = Color32::from_rgb(102, 126, 234);
const REST_COLOR: Color32 = Color32::from_rgb(237, 137, 54);
const WORKOUT_COLOR: Color32 = Color32::from_rgb(72, 187, 120);

/// What the user asked for during a frame. Collected while drawing and
/// applied once the frame's widgets are done with the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Toggle { day_index: usize, exercise_id: String },
    OpenDialog(String),
    CloseDialog,
    SubmitDialog,
}

pub struct PlannerApp<S: KeyValueStore> {
    store: ScheduleStore<S>,
    dialog: AddExerciseDialog,
}

impl<S: KeyValueStore> PlannerApp<S> {
    pub fn new(store: ScheduleStore<S>) -> Self {
        PlannerApp {
            store,
            dialog: AddExerciseDialog::default(),
        }
    }

    pub fn store(&self) -> &ScheduleStore<S> {
        &self.store
    }

    pub fn dialog(&self) -> &AddExerciseDialog {
        &self.dialog
    }

    pub fn apply(&mut self, intent: Intent) {
        let result = match intent {
            Intent::Toggle { day_index, exercise_id } => self.store.toggle_exercise(day_index, &exercise_id),
            Intent::OpenDialog(day) => {
                self.dialog.open(&day);
                Ok(false)
            }
            Intent::CloseDialog => {
                self.dialog.close();
                Ok(false)
            }
            Intent::SubmitDialog => self.dialog.submit(&mut self.store),
        };
        if let Err(e) = result {
            error!("failed to save schedule: {}", e);
        }
    }

    fn show_header(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Workout Planner").heading().size(36.0).strong());
            ui.label(RichText::new("Your weekly fitness schedule").size(18.0));
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            stat_card(
                ui,
                &completion_ratio(self.store.completed_exercise_count(), self.store.total_exercise_count()),
                "Completed",
            );
            stat_card(ui, &self.store.workout_day_count().to_string(), "Workout Days");
        });
    }

    fn show_week(&self, ui: &mut Ui, intents: &mut Vec<Intent>) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (day_index, day) in self.store.schedule().iter().enumerate() {
                    let stroke = if self.store.is_today(day) {
                        Stroke::new(2.0, TODAY_COLOR)
                    } else {
                        Stroke::new(1.0, Color32::GRAY)
                    };

                    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&day.day).size(20.0).strong());
                                let badge_color = if day.is_rest_day { REST_COLOR } else { WORKOUT_COLOR };
                                ui.label(RichText::new(day_badge(day)).color(badge_color));
                            });
                            ui.separator();

                            if day.is_rest_day {
                                ui.label(RichText::new(REST_MESSAGE).italics());
                                return;
                            }

                            for exercise in &day.exercises {
                                ui.horizontal(|ui| {
                                    let mut checked = exercise.completed;
                                    if ui.checkbox(&mut checked, "").changed() {
                                        intents.push(Intent::Toggle {
                                            day_index,
                                            exercise_id: exercise.id.clone(),
                                        });
                                    }
                                    ui.vertical(|ui| {
                                        let name = RichText::new(&exercise.name).strong();
                                        ui.label(if exercise.completed { name.strikethrough() } else { name });
                                        ui.label(RichText::new(exercise_summary(exercise)).small());
                                    });
                                });
                            }

                            ui.add_space(5.0);
                            if ui.button("+ Add Exercise").clicked() {
                                intents.push(Intent::OpenDialog(day.day.clone()));
                            }
                        });
                    });
                }
            });
        });
    }

    fn show_dialog(&mut self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        let Some(day) = self.dialog.selected_day() else {
            return;
        };
        let title = dialog_title(day);
        let form = &mut self.dialog.form;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Exercise Name");
                ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("e.g., Push-ups"));
                ui.label("Sets");
                ui.add(egui::TextEdit::singleline(&mut form.sets).hint_text("e.g., 3"));
                ui.label("Reps");
                ui.add(egui::TextEdit::singleline(&mut form.reps).hint_text("e.g., 15 or 30s"));
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        intents.push(Intent::CloseDialog);
                    }
                    if ui.button("Add Exercise").clicked() {
                        intents.push(Intent::SubmitDialog);
                    }
                });
            });
    }
}

impl<S: KeyValueStore> App for PlannerApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut intents = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            self.show_header(ui);
            ui.add_space(20.0);
            self.show_week(ui, &mut intents);
        });
        self.show_dialog(ctx, &mut intents);

        for intent in intents {
            self.apply(intent);
        }
    }
}

fn stat_card(ui: &mut Ui, value: &str, label: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(28.0).strong().color(TODAY_COLOR));
            ui.label(label);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routines::default_schedule;
    use crate::storage::MemoryStore;

    fn app() -> PlannerApp<MemoryStore> {
        PlannerApp::new(ScheduleStore::open(MemoryStore::new(), "Tuesday"))
    }

    #[test]
    fn toggle_intent_reaches_store() {
        let mut app = app();
        app.apply(Intent::Toggle { day_index: 1, exercise_id: "5".to_string() });

        assert!(app.store().day(1).unwrap().exercises[1].completed);
        assert_eq!(app.store().storage().writes(), 1);
    }

    #[test]
    fn dialog_intents_round_through_submit() {
        let mut app = app();
        app.apply(Intent::OpenDialog("Sunday".to_string()));
        assert_eq!(app.dialog().selected_day(), Some("Sunday"));

        app.dialog.form.name = "Stretching".to_string();
        app.dialog.form.sets = "1".to_string();
        app.dialog.form.reps = "15min".to_string();
        app.apply(Intent::SubmitDialog);

        assert!(!app.dialog().is_open());
        let sunday = app.store().day(6).unwrap();
        assert_eq!(sunday.exercises.len(), 1);
        assert!(sunday.is_rest_day);
    }

    #[test]
    fn cancel_leaves_schedule_untouched() {
        let mut app = app();
        app.apply(Intent::OpenDialog("Monday".to_string()));
        app.dialog.form.name = "Burpees".to_string();
        app.apply(Intent::CloseDialog);

        assert!(!app.dialog().is_open());
        assert_eq!(app.store().schedule(), &default_schedule());
        assert_eq!(app.store().storage().writes(), 0);
    }
}
