pub mod project_user_roles;
pub mod projects;
