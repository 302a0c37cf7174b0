pub mod project;

pub use project::{Category, Project, ProjectDraft, ProjectPatch};
