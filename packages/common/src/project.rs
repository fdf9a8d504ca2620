use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::contains_ignore_case;

/// Whether a project was done for work or on the side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Professional,
    Personal,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] = &[Self::Professional, Self::Personal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Personal => "personal",
        }
    }
}

/// Where a project stands today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Shipped and done.
    Completed,
    /// Still in progress.
    Working,
    /// Abandoned, kept around for the lessons.
    Failed,
}

impl ProjectStatus {
    pub const ALL: &'static [ProjectStatus] = &[Self::Completed, Self::Working, Self::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Working => "working",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a project type or status from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    field: &'static str,
    invalid: String,
    valid: Vec<&'static str>,
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} '{}'. Valid values: {}",
            self.field,
            self.invalid,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for ProjectType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseVariantError {
                field: "type",
                invalid: s.to_string(),
                valid: Self::ALL.iter().map(|k| k.as_str()).collect(),
            })
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseVariantError {
                field: "status",
                invalid: s.to_string(),
                valid: Self::ALL.iter().map(|k| k.as_str()).collect(),
            })
    }
}

/// A showcase entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Repository-assigned identifier.
    pub id: Uuid,
    /// Public lookup key, unique across projects.
    #[schema(example = "ai-music-recommender")]
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Markdown body.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    /// Assigned by the repository when the project is stored.
    pub created_at: DateTime<Utc>,
}

/// Everything needed to store a project, minus the fields the repository assigns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub status: ProjectStatus,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewProject {
    /// Materialize the draft into a stored record.
    pub fn into_project(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            content: self.content,
            kind: self.kind,
            status: self.status,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            created_at,
        }
    }
}

impl Project {
    /// Case-insensitive match against the title, description or any technology.
    ///
    /// A blank term matches every project.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(&self.title, term)
            || contains_ignore_case(&self.description, term)
            || self
                .technologies
                .iter()
                .any(|tech| contains_ignore_case(tech, term))
    }
}
