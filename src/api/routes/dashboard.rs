//! Dashboard Route
//!
//! The render pass: one POST per user interaction, taking the current
//! value of every widget and returning the full dashboard content. Each
//! call re-fetches the meal catalog, records today's workout completion
//! in the session log, and recomputes the progress series.
//!
//! Domain failures never abort the pass. Catalog load failure becomes a
//! warning banner over an empty meal section, an unknown goal or
//! activity level becomes a notice, and the response is always 200 once
//! the request itself validates.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{
    Banner, BmiSection, DashboardRequest, DashboardResponse, MealPlanSection, ProgressSection,
    WorkoutSection,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalog::MealCatalog;
use crate::workouts::WorkoutLibrary;

/// POST /api/v1/dashboard
///
/// Execute one full render pass for a session.
pub async fn render_dashboard(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DashboardRequest>,
) -> ApiResult<Json<DashboardResponse>> {
    validate_dashboard_request(&req)?;

    let session_id = state.sessions.ensure(req.session_id).await;

    // One fetch per pass, no retry. Failure degrades to a warning
    // banner and an empty catalog.
    let outcome = state.catalog.load().await;

    let mut banners = Vec::new();
    if let Some(warning) = outcome.warning {
        banners.push(Banner::warning(warning));
    }
    banners.push(sleep_banner(req.sleep_hours));
    if let Some(glasses) = req.water_glasses {
        banners.push(water_banner(glasses));
    }

    let today = Utc::now().date_naive();
    state
        .sessions
        .record_completion(session_id, today, req.workout_done)
        .await;

    let series = state
        .sessions
        .series(session_id)
        .await
        .unwrap_or_default();

    let response = DashboardResponse {
        session_id,
        profile: profile_lines(&req),
        banners,
        meal_plan: meal_plan_section(&outcome.catalog, &req.goal),
        workout: workout_section(&state.workouts, &req.activity_level),
        bmi: bmi_section(&req),
        progress: ProgressSection {
            no_data: series.is_empty(),
            series,
        },
    };

    tracing::debug!(
        session_id = %session_id,
        goal = %req.goal,
        catalog_goals = outcome.catalog.goal_count(),
        "Dashboard rendered"
    );

    Ok(Json(response))
}

/// Enforce the widget bounds from the form controls
fn validate_dashboard_request(req: &DashboardRequest) -> ApiResult<()> {
    if req.goal.is_empty() {
        return Err(ApiError::Validation("Goal cannot be empty".to_string()));
    }

    if !(10..=80).contains(&req.age) {
        return Err(ApiError::Validation(
            "Age must be between 10 and 80".to_string(),
        ));
    }

    if req.sleep_hours > 12 {
        return Err(ApiError::Validation(
            "Sleep hours must be between 0 and 12".to_string(),
        ));
    }

    if let Some(height) = req.height_cm {
        if !(100.0..=250.0).contains(&height) {
            return Err(ApiError::Validation(
                "Height must be between 100 and 250 cm".to_string(),
            ));
        }
    }

    if let Some(weight) = req.weight_kg {
        if !(30.0..=200.0).contains(&weight) {
            return Err(ApiError::Validation(
                "Weight must be between 30 and 200 kg".to_string(),
            ));
        }
    }

    if let Some(glasses) = req.water_glasses {
        if glasses > 30 {
            return Err(ApiError::Validation(
                "Water intake must be between 0 and 30 glasses".to_string(),
            ));
        }
    }

    Ok(())
}

fn profile_lines(req: &DashboardRequest) -> Vec<String> {
    let mut lines = Vec::new();

    match &req.gender {
        Some(gender) => lines.push(format!("{}, {} years old", gender, req.age)),
        None => lines.push(format!("{} years old", req.age)),
    }
    lines.push(format!("Goal: {}", req.goal));
    lines.push(format!("Activity level: {}", req.activity_level));

    lines
}

fn sleep_banner(sleep_hours: u32) -> Banner {
    if sleep_hours < 6 {
        Banner::warning("Try to sleep at least 7-8 hours for proper recovery.")
    } else {
        Banner::success("Great! You're getting good sleep.")
    }
}

fn water_banner(glasses: u32) -> Banner {
    if glasses < 8 {
        Banner::warning(format!(
            "Try to drink more water. You're {} glasses short of the daily recommendation.",
            8 - glasses
        ))
    } else {
        Banner::success("Awesome! You're staying well hydrated.")
    }
}

fn meal_plan_section(catalog: &MealCatalog, goal: &str) -> MealPlanSection {
    match catalog.get(goal) {
        Some(entry) => MealPlanSection {
            goal: goal.to_string(),
            meals: entry.meals.clone(),
            notice: None,
        },
        None => MealPlanSection {
            goal: goal.to_string(),
            meals: Vec::new(),
            notice: Some(format!("No meals found for goal '{}'.", goal)),
        },
    }
}

fn workout_section(library: &WorkoutLibrary, category: &str) -> WorkoutSection {
    match library.get(category) {
        Some(routine) => WorkoutSection {
            category: category.to_string(),
            heading: Some(routine.heading.clone()),
            tasks: routine.tasks.clone(),
            notice: None,
        },
        None => WorkoutSection {
            category: category.to_string(),
            heading: None,
            tasks: Vec::new(),
            notice: Some(format!("No routine found for activity level '{}'.", category)),
        },
    }
}

/// BMI readout when both inputs are present
fn bmi_section(req: &DashboardRequest) -> Option<BmiSection> {
    let (height_cm, weight_kg) = match (req.height_cm, req.weight_kg) {
        (Some(h), Some(w)) => (h, w),
        _ => return None,
    };

    let value = weight_kg / (height_cm / 100.0).powi(2);
    Some(BmiSection {
        value,
        status: bmi_status(value).to_string(),
    })
}

fn bmi_status(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::BannerLevel;
    use crate::catalog::MealCatalog;

    fn request() -> DashboardRequest {
        DashboardRequest {
            goal: "Weight Loss".to_string(),
            gender: Some("Female".to_string()),
            age: 30,
            sleep_hours: 7,
            activity_level: "Sedentary".to_string(),
            workout_done: false,
            session_id: None,
            height_cm: None,
            weight_kg: None,
            water_glasses: None,
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut req = request();
        assert!(validate_dashboard_request(&req).is_ok());

        req.age = 10;
        req.sleep_hours = 0;
        assert!(validate_dashboard_request(&req).is_ok());

        req.age = 80;
        req.sleep_hours = 12;
        assert!(validate_dashboard_request(&req).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut req = request();
        req.age = 9;
        assert!(validate_dashboard_request(&req).is_err());

        let mut req = request();
        req.sleep_hours = 13;
        assert!(validate_dashboard_request(&req).is_err());

        let mut req = request();
        req.height_cm = Some(99.0);
        assert!(validate_dashboard_request(&req).is_err());

        let mut req = request();
        req.water_glasses = Some(31);
        assert!(validate_dashboard_request(&req).is_err());
    }

    #[test]
    fn test_sleep_banner_thresholds() {
        assert_eq!(sleep_banner(5).level, BannerLevel::Warning);
        assert_eq!(sleep_banner(6).level, BannerLevel::Success);
        assert_eq!(sleep_banner(0).level, BannerLevel::Warning);
    }

    #[test]
    fn test_water_banner_names_the_shortfall() {
        let banner = water_banner(5);
        assert_eq!(banner.level, BannerLevel::Warning);
        assert!(banner.message.contains("3 glasses short"));

        assert_eq!(water_banner(8).level, BannerLevel::Success);
    }

    #[test]
    fn test_missing_goal_takes_notice_branch() {
        let catalog = MealCatalog::new();
        let section = meal_plan_section(&catalog, "Keto");

        assert!(section.meals.is_empty());
        assert_eq!(section.notice.unwrap(), "No meals found for goal 'Keto'.");
    }

    #[test]
    fn test_workout_section_unknown_category() {
        let library = WorkoutLibrary::builtin();
        let section = workout_section(&library, "Swimming");

        assert!(section.tasks.is_empty());
        assert!(section.heading.is_none());
        assert!(section.notice.is_some());
    }

    #[test]
    fn test_bmi_classification() {
        assert_eq!(bmi_status(17.0), "Underweight");
        assert_eq!(bmi_status(22.0), "Normal");
        assert_eq!(bmi_status(27.0), "Overweight");
        assert_eq!(bmi_status(32.0), "Obese");
    }

    #[test]
    fn test_bmi_section_requires_both_inputs() {
        let mut req = request();
        assert!(bmi_section(&req).is_none());

        req.height_cm = Some(170.0);
        assert!(bmi_section(&req).is_none());

        req.weight_kg = Some(70.0);
        let bmi = bmi_section(&req).unwrap();
        assert!((bmi.value - 24.22).abs() < 0.01);
        assert_eq!(bmi.status, "Normal");
    }
}
