use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::article::{Article, NewArticle};
use crate::project::{NewProject, Project};

use super::error::StoreError;
use super::traits::ContentStore;

/// Fields the store needs to index and order a record.
trait Record: Clone {
    fn id(&self) -> Uuid;
    fn slug(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Record for Article {
    fn id(&self) -> Uuid {
        self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn timestamp(&self) -> DateTime<Utc> {
        self.published_at
    }
}

impl Record for Project {
    fn id(&self) -> Uuid {
        self.id
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Insertion-ordered records plus a slug index into them.
struct Collection<T> {
    records: Vec<T>,
    by_slug: HashMap<String, usize>,
    ids: HashSet<Uuid>,
}

impl<T: Record> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            by_slug: HashMap::new(),
            ids: HashSet::new(),
        }
    }

    /// Newest timestamp first; ties keep the later insertion first.
    fn newest_first(&self) -> Vec<T> {
        let mut out: Vec<T> = self.records.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        out
    }

    fn find(&self, slug: &str) -> Option<T> {
        self.by_slug.get(slug).map(|&idx| self.records[idx].clone())
    }

    fn ensure_slug_free(&self, slug: &str) -> Result<(), StoreError> {
        if self.by_slug.contains_key(slug) {
            return Err(StoreError::SlugTaken(slug.to_string()));
        }
        Ok(())
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, record: T) -> Result<T, StoreError> {
        self.ensure_slug_free(record.slug())?;
        if self.ids.contains(&record.id()) {
            return Err(StoreError::DuplicateId(record.id()));
        }

        self.ids.insert(record.id());
        self.by_slug.insert(record.slug().to_string(), self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }
}

/// Process-local [`ContentStore`] holding both collections in memory.
///
/// Each collection sits behind its own lock. A create holds the write lock
/// across the slug check and the insert, so readers never observe a
/// half-inserted record.
pub struct MemoryStore {
    articles: RwLock<Collection<Article>>,
    projects: RwLock<Collection<Project>>,
}

// Collections are append-only and every write completes before the guard is
// released, so a poisoned lock still guards consistent data.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(Collection::new()),
            projects: RwLock::new(Collection::new()),
        }
    }

    /// Store a fully populated article as-is, keeping its id and publish time.
    pub fn import_article(&self, article: Article) -> Result<Article, StoreError> {
        write(&self.articles).insert(article)
    }

    /// Store a fully populated project as-is, keeping its id and creation time.
    pub fn import_project(&self, project: Project) -> Result<Project, StoreError> {
        write(&self.projects).insert(project)
    }

    pub fn article_count(&self) -> usize {
        read(&self.articles).records.len()
    }

    pub fn project_count(&self) -> usize {
        read(&self.projects).records.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore for MemoryStore {
    fn list_articles(&self) -> Vec<Article> {
        read(&self.articles).newest_first()
    }

    fn article_by_slug(&self, slug: &str) -> Option<Article> {
        read(&self.articles).find(slug)
    }

    fn create_article(&self, draft: NewArticle) -> Result<Article, StoreError> {
        let mut articles = write(&self.articles);
        articles.ensure_slug_free(&draft.slug)?;
        let id = articles.fresh_id();
        articles.insert(draft.into_article(id, Utc::now()))
    }

    fn list_projects(&self) -> Vec<Project> {
        read(&self.projects).newest_first()
    }

    fn project_by_slug(&self, slug: &str) -> Option<Project> {
        read(&self.projects).find(slug)
    }

    fn create_project(&self, draft: NewProject) -> Result<Project, StoreError> {
        let mut projects = write(&self.projects);
        projects.ensure_slug_free(&draft.slug)?;
        let id = projects.fresh_id();
        projects.insert(draft.into_project(id, Utc::now()))
    }
}
