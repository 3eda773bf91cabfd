use log::Level;

/// localStorage key holding the last time this browser registered a visit.
pub const LAST_VISIT_KEY: &str = "ala_last_visit";

/// A browser counts as a new visitor once per 24 hours.
pub const VISIT_COOLDOWN_MS: i64 = 24 * 60 * 60 * 1000;

/// How long the "already visited" notice stays on screen.
pub const NOTICE_DURATION_MS: u32 = 3_000;

#[cfg(debug_assertions)]
pub fn get_counter_url() -> &'static str {
    option_env!("ALA_COUNTER_URL").unwrap_or("http://localhost:3001") // counter service run locally
}

#[cfg(not(debug_assertions))]
pub fn get_counter_url() -> &'static str {
    option_env!("ALA_COUNTER_URL").unwrap_or("") // same origin in production
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
