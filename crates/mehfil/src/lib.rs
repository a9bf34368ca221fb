pub mod auth;
pub mod config;
pub mod error;
pub mod onboarding;
pub mod telemetry;
