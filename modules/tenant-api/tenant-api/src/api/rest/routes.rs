use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::{AuthService, ColorService};

#[must_use]
pub fn register_routes(
    router: Router,
    colors: Arc<ColorService>,
    auth: Arc<AuthService>,
) -> Router {
    router
        .route("/", get(handlers::banner).fallback(handlers::unrouted))
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::login).fallback(handlers::unrouted))
        .route(
            "/colors",
            get(handlers::list_colors).post(handlers::create_color),
        )
        .route(
            "/colors/{id}",
            put(handlers::update_color)
                .delete(handlers::delete_color)
                .fallback(handlers::color_item_fallback),
        )
        .layer(Extension(colors))
        .layer(Extension(auth))
}
