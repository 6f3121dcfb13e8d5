use crate::models::Project;

pub async fn list<'e, E: sqlx::PgExecutor<'e>>(executor: E) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY project_id")
        .fetch_all(executor)
        .await
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    display_name: &str,
    description: Option<&str>,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (display_name, description) VALUES ($1, $2) RETURNING *",
    )
    .bind(display_name)
    .bind(description)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i32,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE project_id = $1")
        .bind(project_id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_display_name<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    display_name: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE display_name = $1")
        .bind(display_name)
        .fetch_optional(executor)
        .await
}

/// `None` leaves the column untouched.
pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i32,
    display_name: Option<&str>,
    description: Option<&str>,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects
         SET display_name = COALESCE($2, display_name),
             description = COALESCE($3, description)
         WHERE project_id = $1 RETURNING *",
    )
    .bind(project_id)
    .bind(display_name)
    .bind(description)
    .fetch_one(executor)
    .await
}

pub async fn count_all<'e, E: sqlx::PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}
