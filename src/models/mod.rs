pub mod project;
pub mod project_user_role;

pub use project::Project;
pub use project_user_role::{ProjectRole, ProjectUserRole};
