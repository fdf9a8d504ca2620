pub mod article;
pub mod config;
pub mod project;
pub mod search;
pub mod store;

pub use article::{Article, CategoryCount, DEFAULT_AUTHOR, NewArticle};
pub use config::ContentConfig;
pub use project::{NewProject, ParseVariantError, Project, ProjectStatus, ProjectType};
pub use store::{ContentStore, MemoryStore, StoreError};
