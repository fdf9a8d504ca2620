use common::NewArticle;
use serde::Deserialize;

use crate::error::AppError;

use super::shared::{
    validate_content, validate_labels, validate_required, validate_slug, validate_title,
};

/// Query parameters for listing articles.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListQuery {
    /// Case-insensitive match against title, excerpt and tags.
    #[param(example = "overfitting")]
    pub search: Option<String>,
    /// Exact category filter.
    #[param(example = "Machine Learning")]
    pub category: Option<String>,
}

/// Fixed path segments under `/api/blog` that would shadow an article slug.
pub const RESERVED_ARTICLE_SLUGS: &[&str] = &["categories"];

pub fn validate_new_article(req: &NewArticle) -> Result<(), AppError> {
    validate_slug(&req.slug)?;
    if RESERVED_ARTICLE_SLUGS.contains(&req.slug.as_str()) {
        return Err(AppError::Validation(format!(
            "Slug '{}' is reserved",
            req.slug
        )));
    }
    validate_title(&req.title)?;
    validate_required(&req.excerpt, "Excerpt")?;
    validate_content(&req.content)?;
    validate_required(&req.category, "Category")?;
    validate_labels(&req.tags, "tags")?;
    validate_required(&req.author, "Author")?;
    validate_required(&req.read_time, "Read time")?;
    Ok(())
}
