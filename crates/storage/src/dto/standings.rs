use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the standings endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StandingsFilter {
    pub category: String,
    #[serde(default = "current_year")]
    pub year: i32,
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
