use serde_json::json;

use crate::common::{TestApp, article_body, routes, seeded};

mod listing {
    use super::*;

    #[tokio::test]
    async fn seeded_posts_are_listed_newest_first() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::BLOG).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.pluck("slug"),
            [seeded::NEWEST_ARTICLE, seeded::OLDER_ARTICLE]
        );
    }

    #[tokio::test]
    async fn empty_store_returns_empty_array() {
        let app = TestApp::spawn_empty().await;

        let res = app.get(routes::BLOG).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn new_post_is_listed_first() {
        let app = TestApp::spawn().await;
        app.create_article("fresh-off-the-press", "Fresh").await;

        let res = app.get(routes::BLOG).await;

        let slugs = res.pluck("slug");
        assert_eq!(slugs.len(), 3);
        assert_eq!(slugs[0], "fresh-off-the-press");
    }

    #[tokio::test]
    async fn search_matches_tags_case_insensitively() {
        let app = TestApp::spawn().await;

        let res = app.get(&format!("{}?search=MLOPS", routes::BLOG)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.pluck("slug"), [seeded::OLDER_ARTICLE]);
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&format!("{}?category=Machine%20Learning", routes::BLOG))
            .await;
        assert_eq!(res.pluck("slug"), [seeded::NEWEST_ARTICLE]);

        let res = app
            .get(&format!("{}?category=machine%20learning", routes::BLOG))
            .await;
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn categories_are_counted() {
        let app = TestApp::spawn().await;
        let mut body = article_body("another-career-post", "Another");
        body["category"] = json!("Career");
        app.post(routes::BLOG, &body).await;

        let res = app.get(routes::BLOG_CATEGORIES).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!([
                { "category": "Career", "count": 2 },
                { "category": "Machine Learning", "count": 1 },
            ])
        );
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn seeded_post_is_found_by_slug() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::article(seeded::NEWEST_ARTICLE)).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["title"],
            "Why Your Neural Network is Probably Overfitting (And Other Life Lessons)"
        );
        assert_eq!(res.body["author"], "Alex Chen");
        assert_eq!(res.body["readTime"], "5 min read");
        assert!(res.body["publishedAt"].as_str().unwrap().starts_with("2023-12-15"));
    }

    #[tokio::test]
    async fn unknown_slug_is_404_with_error_body() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::article("missing")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Blog post not found");
    }

    #[tokio::test]
    async fn slug_match_is_case_sensitive() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::article(&seeded::NEWEST_ARTICLE.to_uppercase()))
            .await;

        assert_eq!(res.status, 404);
    }
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn slug_shadowed_by_categories_route_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::BLOG, &article_body("categories", "Shadowed"))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["message"], "Slug 'categories' is reserved");

        let res = app.get(routes::BLOG_CATEGORIES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.pluck("category"), ["Career", "Machine Learning"]);
    }

    #[tokio::test]
    async fn created_post_gets_id_timestamp_and_defaults() {
        let app = TestApp::spawn_empty().await;
        let body = json!({
            "slug": "minimal",
            "title": "  Minimal  ",
            "excerpt": "Bare bones.",
            "content": "Body",
            "category": "Notes",
            "readTime": "1 min read",
        });

        let res = app.post(routes::BLOG, &body).await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(!res.body["id"].as_str().unwrap().is_empty());
        assert!(res.body["publishedAt"].is_string());
        assert_eq!(res.body["title"], "Minimal");
        assert_eq!(res.body["author"], "Alex Chen");
        assert_eq!(res.body["tags"], json!([]));
    }

    #[tokio::test]
    async fn created_post_round_trips_by_slug() {
        let app = TestApp::spawn().await;
        let created = app.create_article("round-trip", "Round Trip").await;

        let res = app.get(&routes::article("round-trip")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], created["id"]);
    }

    #[tokio::test]
    async fn duplicate_slug_is_409() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::BLOG, &article_body(seeded::NEWEST_ARTICLE, "Copycat"))
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");

        let list = app.get(routes::BLOG).await;
        assert_eq!(list.pluck("slug").len(), 2);
    }

    #[tokio::test]
    async fn caller_supplied_id_and_timestamp_are_ignored() {
        let app = TestApp::spawn_empty().await;
        let mut body = article_body("sneaky", "Sneaky");
        body["id"] = json!("00000000-0000-0000-0000-000000000001");
        body["publishedAt"] = json!("1999-01-01T00:00:00Z");

        let res = app.post(routes::BLOG, &body).await;

        assert_eq!(res.status, 201);
        assert_ne!(res.body["id"], "00000000-0000-0000-0000-000000000001");
        assert!(!res.body["publishedAt"].as_str().unwrap().starts_with("1999"));
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected() {
        let app = TestApp::spawn_empty().await;

        let res = app
            .post(routes::BLOG, &article_body("Not A Slug", "Title"))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn missing_required_field_is_structured_400() {
        let app = TestApp::spawn_empty().await;

        let res = app
            .post(routes::BLOG, &json!({ "slug": "no-title" }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_structured_400() {
        let app = TestApp::spawn_empty().await;

        let res = app.post_raw(routes::BLOG, "{not json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
