//! Logo region

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::region::{RegionKind, ResourceRegion};
use crate::styles::APP_STYLES;

/// Image shown in the logo region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoAsset {
    pub src: String,
    pub alt: String,
}

pub async fn load_logo() -> LogoAsset {
    LogoAsset {
        src: "/pokedex-logo.svg".to_string(),
        alt: "Pokédex".to_string(),
    }
}

/// Start loading the logo for a new activation
pub fn logo_region() -> ResourceRegion<LogoAsset> {
    ResourceRegion::new(RegionKind::Logo, Resource::new(|| (), |_| load_logo()))
}

/// Renders nothing until the logo resolves
#[component]
pub fn LogoRegion(region: ResourceRegion<LogoAsset>) -> impl IntoView {
    let logo = region.resource();

    view! {
        <Suspense fallback=|| ()>
            {move || {
                logo.get()
                    .map(|asset| {
                        view! {
                            <header class=APP_STYLES.class("Logo")>
                                <img src=asset.src alt=asset.alt />
                            </header>
                        }
                    })
            }}
        </Suspense>
    }
}
