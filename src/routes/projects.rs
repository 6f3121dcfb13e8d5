use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::extractor::Caller;
use crate::db;
use crate::error::AppError;
use crate::models::{Project, ProjectRole};
use crate::routes::form::OptionalForm;
use crate::state::SharedState;

const DISPLAY_NAME_MAX_LEN: usize = 128;

/// Form fields accepted by both create and update.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    pub display_name: Option<String>,
    pub description: Option<String>,
}

/// Validated input for project creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub display_name: String,
    pub description: Option<String>,
}

/// Validated partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.description.is_none()
    }
}

impl TryFrom<ProjectForm> for NewProject {
    type Error = AppError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        let display_name = form
            .display_name
            .ok_or_else(|| AppError::BadRequest("display_name is required".to_string()))?;
        validate_display_name(&display_name)?;
        validate_description(form.description.as_deref())?;
        Ok(NewProject {
            display_name,
            description: form.description,
        })
    }
}

impl TryFrom<ProjectForm> for ProjectChanges {
    type Error = AppError;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        if let Some(name) = &form.display_name {
            validate_display_name(name)?;
        }
        validate_description(form.description.as_deref())?;
        Ok(ProjectChanges {
            display_name: form.display_name,
            description: form.description,
        })
    }
}

fn validate_display_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "display_name must not be empty".to_string(),
        ));
    }
    if name.contains('\0') {
        return Err(AppError::BadRequest(
            "display_name must not contain NUL characters".to_string(),
        ));
    }
    if name.chars().count() > DISPLAY_NAME_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "display_name must be at most {DISPLAY_NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

// Postgres text columns cannot store NUL.
fn validate_description(description: Option<&str>) -> Result<(), AppError> {
    if description.is_some_and(|d| d.contains('\0')) {
        return Err(AppError::BadRequest(
            "description must not contain NUL characters".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
    pub message: String,
}

impl StatusResponse {
    fn success() -> Self {
        Self {
            status: true,
            message: "Success.".to_string(),
        }
    }
}

fn duplicated(display_name: &str) -> AppError {
    AppError::Conflict(format!("Project name is duplicated. \"{display_name}\""))
}

fn map_unique_violation(e: sqlx::Error, display_name: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            duplicated(display_name)
        }
        _ => AppError::Database(e),
    }
}

/// Insert a project and, when `owner` is given, grant them admin on it.
/// Everything commits together or not at all.
pub async fn create_project(
    pool: &PgPool,
    owner: Option<i32>,
    input: &NewProject,
) -> Result<Project, AppError> {
    let mut tx = pool.begin().await?;

    if db::projects::find_by_display_name(&mut *tx, &input.display_name)
        .await?
        .is_some()
    {
        return Err(duplicated(&input.display_name));
    }

    // The lookup above can race with a concurrent insert; the UNIQUE
    // constraint turns the loser into a Conflict.
    let project = db::projects::create(
        &mut *tx,
        &input.display_name,
        input.description.as_deref(),
    )
    .await
    .map_err(|e| map_unique_violation(e, &input.display_name))?;

    if let Some(user_id) = owner {
        db::project_user_roles::create(&mut *tx, project.project_id, user_id, ProjectRole::Admin)
            .await?;
    }

    tx.commit().await?;
    Ok(project)
}

/// Apply `changes` to an existing project. Returns `None` if it does not exist.
pub async fn update_project(
    pool: &PgPool,
    project_id: i32,
    changes: &ProjectChanges,
) -> Result<Option<Project>, AppError> {
    let mut tx = pool.begin().await?;

    let Some(current) = db::projects::find_by_id(&mut *tx, project_id).await? else {
        return Ok(None);
    };
    if changes.is_empty() {
        return Ok(Some(current));
    }

    let project = db::projects::update(
        &mut *tx,
        project_id,
        changes.display_name.as_deref(),
        changes.description.as_deref(),
    )
    .await
    .map_err(|e| map_unique_violation(e, changes.display_name.as_deref().unwrap_or_default()))?;

    tx.commit().await?;
    Ok(Some(project))
}

pub async fn list(
    _caller: Caller,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = db::projects::list(&state.pool).await?;
    Ok(Json(projects))
}

pub async fn create(
    caller: Caller,
    State(state): State<SharedState>,
    OptionalForm(form): OptionalForm<ProjectForm>,
) -> Result<Json<StatusResponse>, AppError> {
    let input = NewProject::try_from(form)?;
    let project = create_project(&state.pool, caller.user_id, &input).await?;

    tracing::info!(
        project_id = project.project_id,
        owner = ?caller.user_id,
        "project created"
    );

    Ok(Json(StatusResponse::success()))
}

pub async fn get(
    _caller: Caller,
    State(state): State<SharedState>,
    WithRejection(Path(project_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Project>, AppError> {
    let project = db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(project))
}

pub async fn update(
    _caller: Caller,
    State(state): State<SharedState>,
    WithRejection(Path(project_id), _): WithRejection<Path<i32>, AppError>,
    OptionalForm(form): OptionalForm<ProjectForm>,
) -> Result<Json<StatusResponse>, AppError> {
    let changes = ProjectChanges::try_from(form)?;
    update_project(&state.pool, project_id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    if !changes.is_empty() {
        tracing::info!(project_id, "project updated");
    }

    Ok(Json(StatusResponse::success()))
}
