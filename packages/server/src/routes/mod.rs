use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/blog", blog_routes())
        .nest("/projects", project_routes())
        .routes(routes!(handlers::contact::submit_contact))
}

fn blog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::blog::list_articles,
            handlers::blog::create_article
        ))
        .routes(routes!(handlers::blog::list_categories))
        .routes(routes!(handlers::blog::get_article))
}

fn project_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::project::list_projects,
            handlers::project::create_project
        ))
        .routes(routes!(handlers::project::get_project))
}
