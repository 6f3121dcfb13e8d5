use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role a user holds within a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    Admin,
    Member,
}

impl ProjectRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Admin => "admin",
            ProjectRole::Member => "member",
        }
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ProjectRole::Admin),
            "member" => Ok(ProjectRole::Member),
            other => Err(format!("Unknown project role: {other}")),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ProjectUserRole {
    pub project_id: i32,
    pub user_id: i32,
    pub project_role: String,
}

impl ProjectUserRole {
    pub fn role(&self) -> Result<ProjectRole, String> {
        self.project_role.parse()
    }
}
