use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::contains_ignore_case;

/// Author recorded on articles that do not name one.
pub const DEFAULT_AUTHOR: &str = "Alex Chen";

/// A published blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Repository-assigned identifier.
    pub id: Uuid,
    /// Public lookup key, unique across articles.
    #[schema(example = "neural-network-overfitting-life-lessons")]
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    #[schema(example = "Machine Learning")]
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    /// Assigned by the repository when the article is stored.
    pub published_at: DateTime<Utc>,
    #[schema(example = "5 min read")]
    pub read_time: String,
}

/// Everything needed to store an article, minus the fields the repository assigns.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_author")]
    pub author: String,
    pub read_time: String,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.into()
}

impl NewArticle {
    /// Materialize the draft into a stored record.
    pub fn into_article(self, id: Uuid, published_at: DateTime<Utc>) -> Article {
        Article {
            id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            tags: self.tags,
            author: self.author,
            published_at,
            read_time: self.read_time,
        }
    }
}

impl Article {
    /// Case-insensitive match against the title, excerpt or any tag.
    ///
    /// A blank term matches every article.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(&self.title, term)
            || contains_ignore_case(&self.excerpt, term)
            || self.tags.iter().any(|tag| contains_ignore_case(tag, term))
    }
}

/// Number of articles filed under one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
