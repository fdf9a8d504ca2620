use std::collections::BTreeMap;

use crate::article::{Article, CategoryCount, NewArticle};
use crate::project::{NewProject, Project, ProjectType};

use super::error::StoreError;

/// Storage for articles and showcase projects.
///
/// Listings are ordered newest first. When two records share a timestamp the
/// one inserted later comes first.
pub trait ContentStore: Send + Sync {
    /// All articles, most recently published first.
    fn list_articles(&self) -> Vec<Article>;

    /// Find an article by exact, case-sensitive slug.
    fn article_by_slug(&self, slug: &str) -> Option<Article>;

    /// Assign an id and publish time, then store the article.
    fn create_article(&self, draft: NewArticle) -> Result<Article, StoreError>;

    /// Distinct article categories with how many articles each holds, by name.
    fn article_categories(&self) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for article in self.list_articles() {
            *counts.entry(article.category).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect()
    }

    /// All projects, most recently created first.
    fn list_projects(&self) -> Vec<Project>;

    /// Projects of one type, in the same order as [`list_projects`](Self::list_projects).
    fn projects_by_type(&self, kind: ProjectType) -> Vec<Project> {
        self.list_projects()
            .into_iter()
            .filter(|project| project.kind == kind)
            .collect()
    }

    /// Find a project by exact, case-sensitive slug.
    fn project_by_slug(&self, slug: &str) -> Option<Project>;

    /// Assign an id and creation time, then store the project.
    fn create_project(&self, draft: NewProject) -> Result<Project, StoreError>;
}
