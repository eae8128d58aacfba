use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::jwt_auth_middleware;

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router {
    use axum::routing::post;
    use crate::handlers::public::{auth, posts, spots, users};

    Router::new()
        // Token acquisition
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Read-only feeds
        .route("/posts", get(posts::list_all))
        .route("/users", get(users::list))
        .route("/users/:id", get(users::show))
        .route("/skate-spots", get(spots::list))
}

fn protected_routes() -> Router {
    use axum::routing::{delete, post};
    use crate::handlers::protected::{favorites, posts, profile, spots};

    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/posts", post(posts::create))
        .route("/my-posts", get(posts::list_mine))
        .route("/skate-spots", post(spots::create))
        .route("/favorites", get(favorites::list).post(favorites::add))
        .route("/favorites/:id", delete(favorites::remove))
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "sesh API",
        "version": version,
        "description": "Backend API for sesh - a social skate-spot mapping app",
        "endpoints": {
            "home": "/ (public)",
            "auth": "POST /register, POST /login (public - token acquisition)",
            "profile": "GET /profile (bearer)",
            "posts": "GET /posts (public), POST /posts, GET /my-posts (bearer)",
            "users": "GET /users, GET /users/:id (public)",
            "spots": "GET /skate-spots (public), POST /skate-spots (bearer)",
            "favorites": "GET|POST /favorites, DELETE /favorites/:id (bearer)",
        }
    }))
}

async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok",
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string(),
            })),
        ),
    }
}
