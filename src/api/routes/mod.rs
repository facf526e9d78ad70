//! API route handlers

pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod progress;
pub mod workouts;
