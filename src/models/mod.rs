// Data models for the recommendation and planning engine

pub mod health_report;
pub mod nutrition;
pub mod plan;
pub mod user_profile;
pub mod validation;
pub mod workout;

pub use health_report::*;
pub use nutrition::*;
pub use plan::*;
pub use user_profile::*;
pub use validation::*;
pub use workout::*;
