//! Meal Catalog
//!
//! The meal catalog is a two-level mapping from fitness goal to meal type
//! to a recommended meal name, built by grouping rows of a remote CSV.
//!
//! Ordering is load-bearing: goals iterate in the order they first appear
//! in the source rows, meal types likewise within each goal, and when the
//! same (goal, meal_type) pair occurs more than once the first row wins.

mod loader;

pub use loader::{CatalogLoader, CatalogRow, LoadOutcome, DEFAULT_CATALOG_URL};

use serde::Serialize;
use thiserror::Error;

/// One meal slot within a goal: e.g. ("Breakfast", "Oatmeal")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSlot {
    pub meal_type: String,
    pub meal_name: String,
}

/// All meal slots for one goal, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalMeals {
    pub goal: String,
    pub meals: Vec<MealSlot>,
}

/// Goal -> meal type -> meal name mapping with stable first-seen ordering
///
/// An empty catalog is a valid terminal state; the loader substitutes one
/// on any fetch or parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MealCatalog {
    goals: Vec<GoalMeals>,
}

impl MealCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from source rows, first occurrence winning for
    /// duplicate (goal, meal_type) pairs
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert_first(row.goal_type, row.meal_type, row.meal_name);
        }
        catalog
    }

    /// Insert a (goal, meal_type) -> meal_name entry unless the pair is
    /// already present
    fn insert_first(&mut self, goal: String, meal_type: String, meal_name: String) {
        let entry = match self.goals.iter_mut().find(|g| g.goal == goal) {
            Some(entry) => entry,
            None => {
                self.goals.push(GoalMeals {
                    goal,
                    meals: Vec::new(),
                });
                self.goals.last_mut().unwrap()
            }
        };

        if !entry.meals.iter().any(|m| m.meal_type == meal_type) {
            entry.meals.push(MealSlot {
                meal_type,
                meal_name,
            });
        }
    }

    /// Look up all meals for a goal
    pub fn get(&self, goal: &str) -> Option<&GoalMeals> {
        self.goals.iter().find(|g| g.goal == goal)
    }

    /// Look up a single meal name by (goal, meal_type)
    pub fn meal(&self, goal: &str, meal_type: &str) -> Option<&str> {
        self.get(goal)?
            .meals
            .iter()
            .find(|m| m.meal_type == meal_type)
            .map(|m| m.meal_name.as_str())
    }

    /// All goals in first-seen order
    pub fn goals(&self) -> &[GoalMeals] {
        &self.goals
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Number of distinct goals
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}

/// Errors while fetching or parsing the meal catalog
///
/// These never leave the loader; they only feed the diagnostic message
/// shown alongside the empty-catalog fallback.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog source returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("catalog CSV is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}
