use axum::{extract::Request, middleware, routing::get, Router};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    health_check, route_not_found,
    user_handlers::{create_user, delete_user, get_user, get_users, patch_user, replace_user},
};
use users_shared::store::{MemoryUserStore, UserStore};

/// Creates a router backed by the seeded in-memory store
pub fn create_router(prefix: &str) -> Router {
    info!("Creating router with seeded in-memory store");

    let store = Arc::new(MemoryUserStore::default());
    create_router_with_store(store, prefix)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: UserStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // The browser client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Unsupported methods on a known path are unmatched routes too.
    // Each path is also served with a trailing slash.
    let users = || {
        get(get_users::<S>)
            .post(create_user::<S>)
            .fallback(route_not_found)
    };
    let user = || {
        get(get_user::<S>)
            .put(replace_user::<S>)
            .patch(patch_user::<S>)
            .delete(delete_user::<S>)
            .fallback(route_not_found)
    };
    let health = || get(health_check).fallback(route_not_found);

    let api_routes = Router::new()
        .route("/api/users", users())
        .route("/api/users/", users())
        .route("/api/users/:id", user())
        .route("/api/users/:id/", user())
        .route("/api/health", health())
        .route("/api/health/", health())
        .with_state(store);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    // Fallback goes on before the layers so unmatched requests get CORS headers and logging
    router
        .fallback(route_not_found)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
