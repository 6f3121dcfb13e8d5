use crate::models::{ProjectRole, ProjectUserRole};

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i32,
    user_id: i32,
    role: ProjectRole,
) -> Result<ProjectUserRole, sqlx::Error> {
    sqlx::query_as::<_, ProjectUserRole>(
        "INSERT INTO project_user_roles (project_id, user_id, project_role)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(role.as_str())
    .fetch_one(executor)
    .await
}

pub async fn list_by_project<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i32,
) -> Result<Vec<ProjectUserRole>, sqlx::Error> {
    sqlx::query_as::<_, ProjectUserRole>(
        "SELECT * FROM project_user_roles WHERE project_id = $1 ORDER BY user_id",
    )
    .bind(project_id)
    .fetch_all(executor)
    .await
}
