use common::{NewProject, ProjectStatus, ProjectType};
use serde::Deserialize;

use crate::error::AppError;

use super::shared::{
    validate_content, validate_labels, validate_optional_url, validate_required, validate_slug,
    validate_title,
};

/// Query parameters for listing projects.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListQuery {
    /// Only projects of this type: `professional` or `personal`.
    #[serde(rename = "type")]
    #[param(example = "personal")]
    pub kind: Option<String>,
    /// Only projects in this status: `completed`, `working` or `failed`.
    #[param(example = "working")]
    pub status: Option<String>,
    /// Case-insensitive match against title, description and technologies.
    #[param(example = "python")]
    pub search: Option<String>,
}

impl ProjectListQuery {
    pub fn parsed_kind(&self) -> Result<Option<ProjectType>, AppError> {
        self.kind
            .as_deref()
            .map(str::parse::<ProjectType>)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))
    }

    pub fn parsed_status(&self) -> Result<Option<ProjectStatus>, AppError> {
        self.status
            .as_deref()
            .map(str::parse::<ProjectStatus>)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))
    }
}

pub fn validate_new_project(req: &NewProject) -> Result<(), AppError> {
    validate_slug(&req.slug)?;
    validate_title(&req.title)?;
    validate_required(&req.description, "Description")?;
    validate_content(&req.content)?;
    validate_labels(&req.technologies, "technologies")?;
    validate_optional_url(req.github_url.as_deref(), "githubUrl")?;
    validate_optional_url(req.live_url.as_deref(), "liveUrl")?;
    validate_optional_url(req.image_url.as_deref(), "imageUrl")?;
    Ok(())
}
