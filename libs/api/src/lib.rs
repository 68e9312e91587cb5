use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    http::HeaderValue,
    routing::{get, MethodRouter},
    Router,
};
use repository::Repository;
use router::{View, ROUTES};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod category;
pub mod config;
pub mod healthz;
pub mod not_found;
pub mod page;
pub mod post;
mod response;

pub use config::{Config, StaticPage};
pub use response::{ApiResponse, IntoApiResponse};

pub enum ApiError {
    NotFound(String),
    ClientError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    config: Arc<Config>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        post::get_posts,
        post::get_post,
        page::get_page,
        category::get_categories,
    ),
    components(schemas(
        post::response::GetPostsResponse,
        post::response::PostSummary,
        post::response::GetPostResponse,
        post::response::PostDetail,
        post::response::Comment,
        page::response::GetPageResponse,
        category::response::GetCategoriesResponse,
        category::response::Category,
    )),
    tags(
        (name = "blog", description = "Posts, comments and informational pages")
    )
)]
struct ApiDoc;

pub fn serve(repository: Repository, config: Config) -> anyhow::Result<Router> {
    info!(
        task = "start api serving",
        posts = repository.post.len(),
        pages = config.pages.len()
    );

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let state = ApiState {
        repo: repository,
        config: Arc::new(config),
    };

    // views
    let view_router = ROUTES
        .routes()
        .fold(Router::new(), |router, route| {
            router.route(route.pattern, view_handler(route.view))
        });

    let router = Router::new()
        .merge(view_router)
        .route("/categories", get(category::get_categories))
        .route("/healthz", get(healthz::get_health))
        .fallback(not_found::fallback)
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)));

    Ok(router)
}

fn view_handler(view: View) -> MethodRouter<ApiState> {
    match view {
        View::PostList => get(post::get_posts),
        View::PostDetail => get(post::get_post),
        View::About | View::Contact | View::Pricing | View::Profile => {
            get(page::get_page)
        }
        View::NotFound => get(not_found::fallback),
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    const CONFIG: &str = r#"
        [site]
        page_size = 20

        [pages.about]
        title = "About"
        body = "A small personal journal."

        [pages.contact]
        title = "Contact"
        body = "hello@example.com"
    "#;

    fn app() -> Router {
        let repository = Repository::from_fixture().unwrap();
        let config =
            Config::from_toml(&util::parse_config(CONFIG).unwrap()).unwrap();
        serve(repository, config).unwrap()
    }

    async fn call(uri: &str) -> (StatusCode, Option<String>, Option<Value>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, location, serde_json::from_slice(&body).ok())
    }

    fn ids(json: &Value) -> Vec<u64> {
        json["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|post| post["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_get_posts() {
        // Act
        let (status, _, json) = call("/").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["total"], 20);
        assert_eq!(json["page"], 1);
        assert_eq!(ids(&json), (1..=20).collect::<Vec<_>>());

        let first = &json["posts"][0];
        assert_eq!(first["title"], "UKF :(((((((((");
        assert_eq!(first["date"], "March 15, 2023");
        assert_eq!(first["thumbnail"]["color"], "#888888");
        assert_eq!(first["comment_count"], 2);
        assert_eq!(first["href"], "/post/1");
        assert_eq!(
            first["excerpt"].as_str().unwrap().chars().count(),
            post::EXCERPT_CHARS
        );
    }

    #[tokio::test]
    async fn test_get_posts_filtered_and_sorted() {
        // Act
        let (status, _, json) =
            call("/?category=travel&sort=most_liked&limit=2").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["limit"], 2);
        assert_eq!(ids(&json), vec![13, 11]);
    }

    #[tokio::test]
    async fn test_get_posts_bad_pagination() {
        // Act
        let (zero, _, _) = call("/?page=0").await;
        let (garbage, _, _) = call("/?page=abc").await;
        let (unknown_sort, _, _) = call("/?sort=random").await;

        // Assert
        assert_eq!(zero, StatusCode::BAD_REQUEST);
        assert_eq!(garbage, StatusCode::BAD_REQUEST);
        assert_eq!(unknown_sort, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_post_with_comments() {
        // Act
        let (status, _, json) = call("/post/3").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let post = &json.unwrap()["post"];
        assert_eq!(post["title"], "nitra :<");
        assert_eq!(post["href"], "/post/3");
        let comments = post["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1]["author"], "Emily Davis");
        assert_eq!(comments[1]["date"], "July 18, 2023");
    }

    #[tokio::test]
    async fn test_get_post_elementary_journal() {
        // Act
        let (status, _, json) = call("/post/16").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let post = &json.unwrap()["post"];
        assert_eq!(post["title"], "Elementary Journal");
        assert_eq!(post["category"], "Childhood");
        assert_eq!(post["comments"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_get_posts_blank_category_lists_everything() {
        // Act
        let (empty, _, empty_json) = call("/?category=").await;
        let (blank, _, blank_json) = call("/?category=%20%20").await;

        // Assert
        assert_eq!(empty, StatusCode::OK);
        assert_eq!(empty_json.unwrap()["total"], 20);
        assert_eq!(blank, StatusCode::OK);
        assert_eq!(blank_json.unwrap()["total"], 20);
    }

    #[tokio::test]
    async fn test_get_post_rejects_non_canonical_id() {
        // Act
        let (plus, _, _) = call("/post/+3").await;
        let (leading_zero, _, _) = call("/post/03").await;
        let (canonical, _, _) = call("/post/3").await;

        // Assert
        assert_eq!(plus, StatusCode::BAD_REQUEST);
        assert_eq!(leading_zero, StatusCode::BAD_REQUEST);
        assert_eq!(canonical, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_post_errors() {
        // Act
        let (absent, _, _) = call("/post/999").await;
        let (not_a_number, _, _) = call("/post/abc").await;
        let (negative, _, _) = call("/post/-1").await;

        // Assert
        assert_eq!(absent, StatusCode::NOT_FOUND);
        assert_eq!(not_a_number, StatusCode::BAD_REQUEST);
        assert_eq!(negative, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_static_pages() {
        // Act
        let (about, _, json) = call("/about").await;
        let (contact, _, _) = call("/contact").await;
        let (pricing, _, _) = call("/pricing").await;

        // Assert
        assert_eq!(about, StatusCode::OK);
        let json = json.unwrap();
        assert_eq!(json["view"], "About");
        assert_eq!(json["title"], "About");
        assert_eq!(contact, StatusCode::OK);
        // not configured
        assert_eq!(pricing, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_categories() {
        // Act
        let (status, _, json) = call("/categories").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let json = json.unwrap();
        let categories = json["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0]["name"], "Personal");
        assert_eq!(categories[0]["count"], 6);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        // Act
        let (status, location, _) = call("/nope").await;
        let (post_without_id, _, _) = call("/post/").await;
        let (double_slash, double_location, _) = call("//").await;

        // Assert
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(location, None);
        assert_eq!(post_without_id, StatusCode::NOT_FOUND);
        assert_eq!(double_slash, StatusCode::NOT_FOUND);
        assert_eq!(double_location, None);
    }

    #[tokio::test]
    async fn test_trailing_slash_redirects() {
        // Act
        let (about, about_location, _) = call("/about/").await;
        let (post, post_location, _) = call("/post/3/?x=1").await;

        // Assert
        assert_eq!(about, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(about_location.as_deref(), Some("/about"));
        assert_eq!(post, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(post_location.as_deref(), Some("/post/3?x=1"));
    }

    #[tokio::test]
    async fn test_healthz_and_docs() {
        // Act
        let (health, _, _) = call("/healthz").await;
        let (docs, _, json) = call("/api-docs/openapi.json").await;

        // Assert
        assert_eq!(health, StatusCode::OK);
        assert_eq!(docs, StatusCode::OK);
        let paths = &json.unwrap()["paths"];
        assert!(paths.get("/post/{id}").is_some());
        assert!(paths.get("/categories").is_some());
    }

    #[tokio::test]
    async fn test_healthz_unavailable_without_posts() {
        // Arrange
        let repository = Repository::from_json("[]").unwrap();
        let app = serve(repository, Config::default()).unwrap();

        // Act
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_reject_invalid_origin() {
        // Arrange
        let config = Config {
            allowed_origins: vec!["not\na header".to_string()],
            ..Default::default()
        };

        // Act
        let result = serve(Repository::from_fixture().unwrap(), config);

        // Assert
        assert!(result.is_err());
    }
}
