//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{MealCatalog, MealSlot};
use crate::progress::SeriesPoint;
use crate::workouts::RoutineCategory;

// ============================================
// DASHBOARD DTOs
// ============================================

/// One full render pass: the current value of every dashboard widget
#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    /// Selected fitness goal (catalog top-level key)
    pub goal: String,
    /// Selected gender, echoed back in the profile lines
    #[serde(default)]
    pub gender: Option<String>,
    /// Age in years (10-80)
    pub age: u32,
    /// Hours slept last night (0-12)
    pub sleep_hours: u32,
    /// Selected workout category
    pub activity_level: String,
    /// Whether today's workout is marked complete
    #[serde(default)]
    pub workout_done: bool,
    /// Session to resume; omitted on the first render
    #[serde(default)]
    pub session_id: Option<Uuid>,
    /// Height in cm (100-250), enables the BMI section
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Weight in kg (30-200), enables the BMI section
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Glasses of water today (0-30), enables the hydration banner
    #[serde(default)]
    pub water_glasses: Option<u32>,
}

/// Everything the dashboard needs to draw one render pass
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// Session id to thread through subsequent interactions
    pub session_id: Uuid,
    /// Plain text lines summarizing the user profile
    pub profile: Vec<String>,
    /// Warning/success/info banners in display order
    pub banners: Vec<Banner>,
    /// Meal plan for the selected goal
    pub meal_plan: MealPlanSection,
    /// Workout routine for the selected activity level
    pub workout: WorkoutSection,
    /// BMI readout, present when height and weight were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<BmiSection>,
    /// Cumulative workout progress chart data
    pub progress: ProgressSection,
}

/// A user-visible banner line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub level: BannerLevel,
    pub message: String,
}

/// Banner severity, mirrored by the dashboard's styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Info,
    Success,
    Warning,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: BannerLevel::Warning, message: message.into() }
    }
}

/// Meal plan for one goal, or a notice when no meals were found
#[derive(Debug, Serialize)]
pub struct MealPlanSection {
    pub goal: String,
    pub meals: Vec<MealSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Workout routine for one category, or a notice for an unknown category
#[derive(Debug, Serialize)]
pub struct WorkoutSection {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub tasks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Computed BMI with its classification
#[derive(Debug, Serialize)]
pub struct BmiSection {
    pub value: f64,
    pub status: String,
}

/// Cumulative progress series; `no_data` tells the dashboard to render
/// its explicit "no data yet" state instead of an empty chart
#[derive(Debug, Serialize)]
pub struct ProgressSection {
    pub series: Vec<SeriesPoint>,
    pub no_data: bool,
}

// ============================================
// CATALOG & WORKOUT DTOs
// ============================================

/// Current catalog plus the load diagnostic, if the fallback kicked in
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub catalog: MealCatalog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The full workout library
#[derive(Debug, Serialize)]
pub struct WorkoutsResponse {
    pub categories: Vec<RoutineCategory>,
}

// ============================================
// PROGRESS DTOs
// ============================================

/// Record a workout completion for a session
#[derive(Debug, Deserialize)]
pub struct RecordProgressRequest {
    pub session_id: Uuid,
    /// Defaults to today (UTC) when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub completed: bool,
}

/// Outcome of a completion record
#[derive(Debug, Serialize)]
pub struct RecordProgressResponse {
    pub session_id: Uuid,
    /// False when the day was already recorded or `completed` was false
    pub recorded: bool,
    /// Total distinct completed days after the call
    pub total_days: usize,
}

/// Cumulative series for one session
#[derive(Debug, Serialize)]
pub struct ProgressSeriesResponse {
    pub session_id: Uuid,
    pub series: Vec<SeriesPoint>,
    pub no_data: bool,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub catalog_url: String,
    pub sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
