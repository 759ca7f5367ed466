//models.rs
use serde::{Deserialize, Serialize};


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub completed: bool
}

/// One weekday's plan. A rest day is built with no exercises, but nothing
/// stops exercises from being added to it later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    #[serde(rename = "isRestDay")]
    pub is_rest_day: bool,
    #[serde(rename = "workouts")]
    pub exercises: Vec<Exercise>
}

/// Seven days, Monday first.
pub type Schedule = Vec<DaySchedule>;

impl Exercise {
    pub fn new(id: &str, name: &str, sets: &str, reps: &str) -> Self {
        Exercise {
            id: id.to_string(),
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            completed: false,
        }
    }
}

impl DaySchedule {
    pub fn workout(day: &str, exercises: Vec<Exercise>) -> Self {
        DaySchedule {
            day: day.to_string(),
            is_rest_day: false,
            exercises,
        }
    }

    pub fn rest(day: &str) -> Self {
        DaySchedule {
            day: day.to_string(),
            is_rest_day: true,
            exercises: Vec::new(),
        }
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.exercises.iter().any(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_schedule_uses_persisted_field_names() {
        let day = DaySchedule::workout("Monday", vec![Exercise::new("1", "Push-ups", "3", "15")]);
        let json = serde_json::to_value(&day).unwrap();

        assert_eq!(json["day"], "Monday");
        assert_eq!(json["isRestDay"], false);
        assert_eq!(json["workouts"][0]["id"], "1");
        assert_eq!(json["workouts"][0]["reps"], "15");
        assert_eq!(json["workouts"][0]["completed"], false);
    }

    #[test]
    fn parses_saved_day_verbatim() {
        let raw = r#"{"day":"Saturday","isRestDay":false,"workouts":[
            {"id":"14","name":"Jump Rope","sets":"3","reps":"2min","completed":true}]}"#;
        let day: DaySchedule = serde_json::from_str(raw).unwrap();

        assert_eq!(day.day, "Saturday");
        assert_eq!(day.exercises[0].reps, "2min");
        assert!(day.exercises[0].completed);
        assert_eq!(day.completed_count(), 1);
    }

    #[test]
    fn rest_day_starts_empty() {
        let day = DaySchedule::rest("Sunday");
        assert!(day.is_rest_day);
        assert!(day.exercises.is_empty());
        assert!(!day.contains_id("1"));
    }
}
