use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i32,
    pub display_name: String,
    pub description: Option<String>,
    /// Exposed to clients as Unix seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub register_date: DateTime<Utc>,
}
