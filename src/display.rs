use crate::models::{DaySchedule, Exercise};

pub const REST_MESSAGE: &str = "Recovery day - your muscles need rest!";

/// Badge shown next to the day name.
pub fn day_badge(day: &DaySchedule) -> String {
    if day.is_rest_day {
        "Rest Day".to_string()
    } else {
        format!("{} exercises", day.exercises.len())
    }
}

pub fn exercise_summary(exercise: &Exercise) -> String {
    format!("{} sets × {} reps", exercise.sets, exercise.reps)
}

/// "completed/total", as in the stats panel.
pub fn completion_ratio(completed: usize, total: usize) -> String {
    format!("{}/{}", completed, total)
}

pub fn dialog_title(day: &str) -> String {
    format!("Add Exercise to {}", day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routines::default_schedule;

    #[test]
    fn badges_follow_rest_flag() {
        let schedule = default_schedule();
        assert_eq!(day_badge(&schedule[0]), "3 exercises");
        assert_eq!(day_badge(&schedule[2]), "Rest Day");
        assert_eq!(day_badge(&schedule[5]), "2 exercises");
    }

    #[test]
    fn summary_keeps_free_form_reps() {
        let plank = &default_schedule()[0].exercises[2];
        assert_eq!(exercise_summary(plank), "3 sets × 30s reps");
    }

    #[test]
    fn stats_and_titles() {
        assert_eq!(completion_ratio(1, 14), "1/14");
        assert_eq!(dialog_title("Thursday"), "Add Exercise to Thursday");
    }
}
