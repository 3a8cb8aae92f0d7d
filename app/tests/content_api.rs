#![cfg(feature = "ssr")]

mod harness;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use app::api::{Delivery, DeliveryError, deliver_contact};
use app::client::ContentError;
use app::filter::{CategoryFilter, by_category, search};
use app::loadable::{FetchKind, Loadable, Phase};
use app::types::{ContactError, ContactRequest};
use harness::FakeContentApi;

const PROJECTS_FAILED: &str = "Failed to load projects. Make sure backend is running.";

fn project(id: &str, title: &str, category: Option<&str>) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": format!("{title} description"),
        "category": category,
        "technologies": ["Rust"],
        "thumbnail": null,
        "images": [],
        "featured": false,
    })
}

#[tokio::test]
async fn test_empty_project_list_is_empty_phase() {
    let api = FakeContentApi::builder().get("/projects", 200, "[]").start().await;

    let outcome = api.client().projects().await;
    let mut state = Loadable::Loading;
    state.settle(outcome, PROJECTS_FAILED, FetchKind::Activation);

    assert_eq!(state.phase(), Phase::Empty);
    assert_eq!(api.hits().len(), 1);
    assert_eq!(api.hits()[0].path, "/api/projects");
}

#[tokio::test]
async fn test_server_error_becomes_failed_phase() {
    let api = FakeContentApi::builder()
        .get("/projects", 500, r#"{"message":"boom"}"#)
        .start()
        .await;

    let outcome = api.client().projects().await;
    assert_matches!(
        &outcome,
        Err(ContentError::Status { status, .. }) if *status == StatusCode::INTERNAL_SERVER_ERROR
    );

    let mut state = Loadable::Loading;
    state.settle(outcome, PROJECTS_FAILED, FetchKind::Activation);
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error(), Some(PROJECTS_FAILED));
}

#[tokio::test]
async fn test_failed_refresh_keeps_profile() {
    let api = FakeContentApi::builder()
        .get("/profile", 200, r#"{"name":"Yasith","title":"Developer"}"#)
        .start()
        .await;

    let mut state = Loadable::Loading;
    state.settle(api.client().profile().await, "Failed to load profile", FetchKind::Activation);
    assert_eq!(state.ready().map(|p| p.name.as_str()), Some("Yasith"));

    let outage = FakeContentApi::builder().get("/profile", 503, "{}").start().await;
    let refresh = outage.client().profile().await;
    assert!(refresh.is_err());
    state.settle(refresh, "Failed to load profile", FetchKind::Refresh);
    assert_eq!(state.ready().map(|p| p.title.as_str()), Some("Developer"));
}

#[tokio::test]
async fn test_profile_with_nulls_uses_defaults() {
    let api = FakeContentApi::builder()
        .get(
            "/profile",
            200,
            r#"{"name":null,"heroImage":"","achievements":null,"techStack":[{"skill":"Rust","percentage":90}]}"#,
        )
        .start()
        .await;

    let profile = api.client().profile().await.unwrap();
    assert_eq!(profile.name, "");
    assert_eq!(profile.hero_image(), None);
    assert_eq!(profile.achievements.projects_completed, 0);
    assert_eq!(profile.tech_stack.len(), 1);
    assert_eq!(profile.tech_stack[0].width_percent(), 90);
}

#[tokio::test]
async fn test_category_filter_over_fetched_projects() {
    let projects = json!([
        project("1", "Shop", Some("Mobile")),
        project("2", "Site", Some("Web App")),
        project("3", "Logo", Some("Graphic Design")),
        project("4", "Tracker", Some("Mobile")),
        project("5", "Legacy", None),
    ]);
    let api = FakeContentApi::builder()
        .get("/projects", 200, projects.to_string())
        .start()
        .await;

    let all = api.client().projects().await.unwrap();
    assert_eq!(all.len(), 5);

    let mobile = by_category(&all, &CategoryFilter::from_label("Mobile"));
    let ids: Vec<_> = mobile.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);

    let web = by_category(&all, &CategoryFilter::from_label("Web App"));
    assert_eq!(web.len(), 2);
    assert_eq!(all.len(), 5);
}

#[tokio::test]
async fn test_featured_projects_endpoint() {
    let api = FakeContentApi::builder()
        .get("/projects/featured", 200, json!([project("7", "Hero", None)]).to_string())
        .start()
        .await;

    let featured = api.client().featured_projects().await.unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].category(), "Web App");
    assert_eq!(api.hits()[0].path, "/api/projects/featured");
}

#[tokio::test]
async fn test_project_by_id() {
    let api = FakeContentApi::builder()
        .get("/projects/abc123", 200, project("abc123", "Shop", Some("Mobile")).to_string())
        .start()
        .await;
    let client = api.client();

    let found = client.project("abc123").await.unwrap();
    assert_eq!(found.map(|p| p.title), Some("Shop".to_owned()));
    assert_eq!(client.project("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_unknown_blog_post_is_none() {
    let api = FakeContentApi::builder()
        .get("/blog/null-post", 200, "null")
        .start()
        .await;
    let client = api.client();

    assert_eq!(client.blog_post("does-not-exist").await.unwrap(), None);
    assert_eq!(client.blog_post("null-post").await.unwrap(), None);

    let mut state = Loadable::Loading;
    state.settle(client.blog_post("gone").await, "Failed to load article", FetchKind::Activation);
    assert_eq!(state.phase(), Phase::Empty);
}

#[tokio::test]
async fn test_post_visibility_follows_content_api() {
    let api = FakeContentApi::builder()
        .get("/blog/draft", 404, r#"{"message":"Post not found"}"#)
        .get(
            "/blog/shown",
            200,
            r#"{"_id":"9","slug":"shown","title":"Shown","content":"text","published":false}"#,
        )
        .start()
        .await;
    let client = api.client();

    assert_eq!(client.blog_post("draft").await.unwrap(), None);
    let shown = client.blog_post("shown").await.unwrap().unwrap();
    assert_eq!(shown.title, "Shown");
    assert!(!shown.published);
}

#[tokio::test]
async fn test_blog_search_over_fetched_posts() {
    let posts = json!([
        {"_id": "1", "slug": "rust", "title": "Learning Rust", "content": "ownership", "tags": ["systems"], "published": true, "createdAt": "2024-03-05T10:00:00.000Z"},
        {"_id": "2", "slug": "css", "title": "CSS Tricks", "content": "grid", "tags": null, "published": true, "createdAt": "2024-03-06T10:00:00.000Z"},
    ]);
    let api = FakeContentApi::builder()
        .get("/blog", 200, posts.to_string())
        .start()
        .await;

    let all = api.client().blog_posts().await.unwrap();
    let found = search(&all, "SYSTEMS");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "rust");
    assert_eq!(found[0].published_on(), "March 5, 2024");
    assert_eq!(search(&all, "").len(), 2);
}

#[tokio::test]
async fn test_incomplete_contact_sends_nothing() {
    let api = FakeContentApi::builder()
        .post("/contact", 200, r#"{"message":"ok"}"#)
        .start()
        .await;
    let request = ContactRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "   ".to_owned(),
        website: None,
    };

    let outcome = deliver_contact(&api.client(), &request).await;
    assert_matches!(outcome, Err(DeliveryError::Invalid(ContactError::MissingFields)));
    assert!(api.hits().is_empty());
}

#[tokio::test]
async fn test_contact_is_forwarded_trimmed() {
    let api = FakeContentApi::builder()
        .post("/contact", 201, r#"{"message":"Message sent"}"#)
        .start()
        .await;
    let request = ContactRequest {
        name: " Ada ".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello there".to_owned(),
        website: Some(String::new()),
    };

    let outcome = deliver_contact(&api.client(), &request).await;
    assert_matches!(outcome, Ok(Delivery::Sent));

    let hits = api.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].method, Method::POST);
    assert_eq!(hits[0].path, "/api/contact");
    let body: Value = serde_json::from_str(&hits[0].body).unwrap();
    assert_eq!(
        body,
        json!({"name": "Ada", "email": "ada@example.com", "message": "Hello there"})
    );
}

#[tokio::test]
async fn test_contact_rejected_upstream() {
    let api = FakeContentApi::builder()
        .post("/contact", 500, r#"{"message":"smtp down"}"#)
        .start()
        .await;
    let request = ContactRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
        website: None,
    };

    let outcome = deliver_contact(&api.client(), &request).await;
    assert_matches!(outcome, Err(DeliveryError::Upstream(ContentError::Status { .. })));
    assert_eq!(api.hits().len(), 1);
}
