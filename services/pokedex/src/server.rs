//! HTTP surface: the server-rendered document shell and static site files

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use any_spawner::Executor;
use axum::Router;
use leptos::config::LeptosOptions;
use pokedex_app::components::router::SERVER_PATHS;
use pokedex_app::{shell, ShellMeta};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// What every page request renders with
#[derive(Clone)]
pub struct PageState {
    pub options: LeptosOptions,
    pub meta: ShellMeta,
}

/// Build the axum router serving the shell for every page path
pub fn build_router(config: &Config) -> Router {
    if Executor::init_tokio().is_ok() {
        tracing::debug!("Initialized leptos executor on tokio");
    }

    let page = PageState {
        options: config.leptos_options(),
        meta: config.shell.clone(),
    };

    let mut router = Router::new().route("/health", get(health_handler));
    for path in SERVER_PATHS {
        tracing::debug!("Serving document shell at {}", path);
        router = router.route(path, get(page_handler));
    }

    router
        .fallback_service(ServeDir::new(&config.site.site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(page)
}

async fn page_handler(State(page): State<PageState>, request: Request<Body>) -> Response {
    let render = leptos_axum::render_app_to_stream(move || {
        shell(page.options.clone(), page.meta.clone())
    });
    render(request).await
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
