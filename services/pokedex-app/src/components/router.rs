//! Router region

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use serde::{Deserialize, Serialize};

use crate::components::pages::{Home, NotFound, PokemonDetail};
use crate::region::{RegionKind, ResourceRegion};
use crate::styles::APP_STYLES;

/// Page paths in axum route syntax, for hosts that serve the shell
pub const SERVER_PATHS: &[&str] = &["/", "/pokemon/{id}"];

/// A link in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub href: String,
    pub label: String,
}

pub async fn load_navigation() -> Vec<NavEntry> {
    vec![NavEntry {
        href: "/".to_string(),
        label: "Home".to_string(),
    }]
}

/// Start loading the navigation for a new activation
pub fn router_region() -> ResourceRegion<Vec<NavEntry>> {
    ResourceRegion::new(
        RegionKind::Router,
        Resource::new(|| (), |_| load_navigation()),
    )
}

/// Renders nothing until the navigation resolves, then the routed pages
#[component]
pub fn RouterRegion(region: ResourceRegion<Vec<NavEntry>>) -> impl IntoView {
    let navigation = region.resource();

    view! {
        <Suspense fallback=|| ()>
            {move || {
                navigation
                    .get()
                    .map(|entries| {
                        view! {
                            <Router>
                                <nav class=APP_STYLES.class("Nav")>
                                    {entries
                                        .into_iter()
                                        .map(|entry| view! { <A href=entry.href>{entry.label}</A> })
                                        .collect_view()}
                                </nav>
                                <main class=APP_STYLES.class("Page")>
                                    <Routes fallback=|| view! { <NotFound /> }>
                                        <Route path=path!("/") view=Home />
                                        <Route path=path!("/pokemon/:id") view=PokemonDetail />
                                    </Routes>
                                </main>
                            </Router>
                        }
                    })
            }}
        </Suspense>
    }
}
