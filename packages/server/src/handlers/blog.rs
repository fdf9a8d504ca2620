use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{Article, CategoryCount, NewArticle};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::blog::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Blog",
    operation_id = "listArticles",
    summary = "List blog posts",
    description = "Returns every blog post, most recently published first. Optional `search` matches title, excerpt and tags case-insensitively; optional `category` keeps only posts in that exact category.",
    params(ArticleListQuery),
    responses(
        (status = 200, description = "Blog posts", body = Vec<Article>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleListQuery>,
) -> Json<Vec<Article>> {
    let search = query.search.as_deref().unwrap_or_default();
    let articles: Vec<Article> = state
        .store
        .list_articles()
        .into_iter()
        .filter(|a| query.category.as_deref().is_none_or(|c| a.category == c))
        .filter(|a| a.matches_search(search))
        .collect();

    Json(articles)
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Blog",
    operation_id = "listArticleCategories",
    summary = "List blog categories",
    description = "Returns each distinct category with the number of posts filed under it, sorted by name.",
    responses(
        (status = 200, description = "Categories with post counts", body = Vec<CategoryCount>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryCount>> {
    Json(state.store.article_categories())
}

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Blog",
    operation_id = "getArticle",
    summary = "Get a blog post by slug",
    description = "Returns the full blog post, including its Markdown content. Slug matching is exact and case-sensitive.",
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "Blog post", body = Article),
        (status = 404, description = "Blog post not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, AppError> {
    state
        .store
        .article_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Blog",
    operation_id = "createArticle",
    summary = "Publish a blog post",
    description = "Stores a new blog post. The id and `publishedAt` are assigned by the server; `author` defaults to the site owner and `tags` to an empty list.",
    request_body = NewArticle,
    responses(
        (status = 201, description = "Blog post created", body = Article),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Slug already in use (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(slug = %payload.slug))]
pub async fn create_article(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<NewArticle>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_article(&payload)?;
    payload.title = payload.title.trim().to_string();

    let article = state.store.create_article(payload)?;
    tracing::info!(id = %article.id, "Blog post created");

    Ok((StatusCode::CREATED, Json(article)))
}
