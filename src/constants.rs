//! Application constants and configuration defaults

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_APP_TITLE: &str = "AI-Based Timetable Automation";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const TAGLINE: &str = "Multi-tenant baseline implementation scaffold.";
