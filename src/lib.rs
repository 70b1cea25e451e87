//! Personalized workout recommendation and weekly training plan engine.
//!
//! The engine is a pure, synchronous, in-memory computation: callers supply
//! a user profile, recent nutrition items and a health report, and get back
//! a ranked workout catalog and, from that catalog, a multi-week plan with
//! day-by-day assignments, goals, nutrition guidance and progress targets.
//! Persistence, transport and UI concerns live in the surrounding
//! application, which serializes these models to JSON.

pub mod config;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use models::*;
pub use services::{
    PlanGenerationRequest, PlanGenerationService, PlanIdProvider, RecommendationRequest,
    SystemIdProvider, WorkoutRecommendationService,
};
