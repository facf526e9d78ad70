//! Workout Library
//!
//! Static mapping from activity level to an ordered list of routine
//! tasks. Built once at process start and never mutated; tasks are
//! free-form strings with sets/reps/duration embedded as text.

use serde::Serialize;

/// One workout category with its display heading and ordered tasks
#[derive(Debug, Clone, Serialize)]
pub struct RoutineCategory {
    pub category: String,
    pub heading: String,
    pub tasks: Vec<String>,
}

/// Read-only collection of workout routines keyed by category
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutLibrary {
    categories: Vec<RoutineCategory>,
}

impl WorkoutLibrary {
    /// The built-in routine set
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                RoutineCategory {
                    category: "Sedentary".to_string(),
                    heading: "Sedentary Routine (Great for Beginners)".to_string(),
                    tasks: strings(&[
                        "10-min Morning Stretch",
                        "15-min Walk",
                        "10-min Breathing or Yoga",
                    ]),
                },
                RoutineCategory {
                    category: "Light Exercise".to_string(),
                    heading: "Light Home Workout (No Equipment Needed)".to_string(),
                    tasks: strings(&[
                        "20 Squats",
                        "20 Lunges",
                        "15 Knee Push-ups",
                        "20-min Walk or Jog",
                        "10-min Yoga",
                    ]),
                },
                RoutineCategory {
                    category: "Moderate/Heavy Exercise".to_string(),
                    heading: "Gym/Heavy Workout (For Athletes)".to_string(),
                    tasks: strings(&[
                        "Bench Press",
                        "Shoulder Press",
                        "Push-ups",
                        "Pull-ups",
                        "Dumbbell Rows",
                        "Squats",
                        "Deadlifts",
                        "Lunges",
                        "Calf Raises",
                        "Planks",
                        "Leg Raises",
                        "Russian Twists",
                        "20-30 Min Run or Cycling",
                    ]),
                },
            ],
        }
    }

    /// Look up a category by name
    pub fn get(&self, category: &str) -> Option<&RoutineCategory> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// All categories in definition order
    pub fn categories(&self) -> &[RoutineCategory] {
        &self.categories
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories() {
        let library = WorkoutLibrary::builtin();

        let names: Vec<&str> = library
            .categories()
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Sedentary", "Light Exercise", "Moderate/Heavy Exercise"]
        );
    }

    #[test]
    fn test_lookup() {
        let library = WorkoutLibrary::builtin();

        let light = library.get("Light Exercise").unwrap();
        assert_eq!(light.tasks.len(), 5);
        assert_eq!(light.tasks[0], "20 Squats");

        assert!(library.get("Powerlifting").is_none());
    }
}
