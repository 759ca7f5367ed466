use chrono::{Datelike, Local, Weekday};

use crate::error::PlannerError;
use crate::models::{DaySchedule, Exercise, Schedule};

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday name from the local clock.
pub fn today_name() -> &'static str {
    weekday_name(Local::now().weekday())
}

/// The schedule used on first run, when nothing has been saved yet.
pub fn default_schedule() -> Schedule {
    vec![
        DaySchedule::workout("Monday", vec![
            Exercise::new("1", "Push-ups", "3", "15"),
            Exercise::new("2", "Squats", "3", "20"),
            Exercise::new("3", "Plank", "3", "30s"),
        ]),
        DaySchedule::workout("Tuesday", vec![
            Exercise::new("4", "Pull-ups", "3", "8"),
            Exercise::new("5", "Lunges", "3", "12"),
            Exercise::new("6", "Bicycle Crunches", "3", "20"),
        ]),
        DaySchedule::rest("Wednesday"),
        DaySchedule::workout("Thursday", vec![
            Exercise::new("7", "Dumbbell Press", "4", "10"),
            Exercise::new("8", "Deadlifts", "4", "8"),
            Exercise::new("9", "Mountain Climbers", "3", "15"),
        ]),
        DaySchedule::workout("Friday", vec![
            Exercise::new("10", "Dips", "3", "12"),
            Exercise::new("11", "Leg Press", "4", "12"),
            Exercise::new("12", "Russian Twists", "3", "20"),
        ]),
        DaySchedule::workout("Saturday", vec![
            Exercise::new("13", "Running", "1", "30min"),
            Exercise::new("14", "Jump Rope", "3", "2min"),
        ]),
        DaySchedule::rest("Sunday"),
    ]
}

pub fn parse_schedule(schedule_json: &str) -> Result<Schedule, PlannerError> {
    serde_json::from_str(schedule_json).map_err(PlannerError::MalformedSchedule)
}

pub fn serialize_schedule(schedule: &Schedule) -> Result<String, PlannerError> {
    serde_json::to_string(schedule).map_err(PlannerError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_follows_week_order() {
        let schedule = default_schedule();
        let days: Vec<&str> = schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, WEEK_DAYS);
    }

    #[test]
    fn default_rest_days_are_wednesday_and_sunday() {
        let rest: Vec<String> = default_schedule()
            .into_iter()
            .filter(|d| d.is_rest_day)
            .map(|d| d.day)
            .collect();
        assert_eq!(rest, vec!["Wednesday", "Sunday"]);
    }

    #[test]
    fn default_schedule_has_fourteen_pending_exercises() {
        let schedule = default_schedule();
        let total: usize = schedule.iter().map(|d| d.exercises.len()).sum();
        assert_eq!(total, 14);
        assert!(schedule.iter().flat_map(|d| &d.exercises).all(|e| !e.completed));
        assert_eq!(schedule[5].exercises[1].reps, "2min");
    }

    #[test]
    fn weekday_names_match_week_order() {
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for (weekday, expected) in weekdays.into_iter().zip(WEEK_DAYS) {
            assert_eq!(weekday_name(weekday), expected);
        }
        assert!(WEEK_DAYS.contains(&today_name()));
    }

    #[test]
    fn round_trip_keeps_fields_and_order() {
        let mut schedule = default_schedule();
        schedule[0].exercises[2].completed = true;
        schedule[2].exercises.push(Exercise::new("x", "Yoga", "1", "20min"));

        let json = serialize_schedule(&schedule).unwrap();
        assert_eq!(parse_schedule(&json).unwrap(), schedule);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            parse_schedule("{not json"),
            Err(PlannerError::MalformedSchedule(_))
        ));
        assert!(parse_schedule(r#"[{"day":"Monday"}]"#).is_err());
    }
}
