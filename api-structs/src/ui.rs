pub mod analytics;
pub mod user;
