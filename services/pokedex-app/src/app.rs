//! Application root and client bootstrap component

use leptos::context::Provider;
use leptos::prelude::*;
use leptos::tachys::reactive_graph::OwnedView;
use leptos_meta::provide_meta_context;

use crate::bootstrap::{Bootstrap, Completion, Frame, Regions, StoreFactory};
use crate::components::logo::{logo_region, LogoAsset, LogoRegion};
use crate::components::router::{router_region, NavEntry, RouterRegion};
use crate::devtools;
use crate::error::BootstrapError;
use crate::reducer::{root_reducer, Action, AppStore, PokedexState};
use crate::region::ResourceRegion;
use crate::styles::APP_STYLES;

pub type AppRegions = Regions<ResourceRegion<LogoAsset>, ResourceRegion<Vec<NavEntry>>>;

/// The bootstrap lifecycle driven by [`ClientBootstrap`]
pub type AppBootstrap =
    Bootstrap<PokedexState, Action, ResourceRegion<LogoAsset>, ResourceRegion<Vec<NavEntry>>>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let factory = StoreFactory::new(root_reducer, devtools::probe::<PokedexState, Action>);

    view! { <ClientBootstrap factory /> }
}

/// Builds the store after the first client render, then mounts the
/// interactive subtree under a provider.
///
/// Effects never run during server rendering, so the server always emits the
/// blank frame and the store only ever exists in the browser. Everything the
/// component creates lives in its own owner; dropping the view ends the
/// activation.
#[component]
pub fn ClientBootstrap(factory: StoreFactory<PokedexState, Action>) -> impl IntoView {
    let (owner, bootstrap) = bootstrap_scope(factory);

    let view = owner.with(|| {
        Effect::new(move |_| {
            initialize(bootstrap);
        });

        move || {
            let (layout, store, regions) = bootstrap.with(|boot| match boot.render() {
                Frame::Interactive(layout) => {
                    Some((layout, boot.store().cloned()?, *boot.regions()?))
                }
                Frame::Blank => None,
            })?;
            log::debug!("Rendering interactive layout under {}", layout.provider);

            Some(view! {
                <Provider value=store>
                    <StrictMode>
                        <div class=layout.container_class>
                            <LogoRegion region=regions.logo />
                            <RouterRegion region=regions.router />
                        </div>
                    </StrictMode>
                </Provider>
            })
        }
    });

    OwnedView::new_with_owner(view, owner)
}

/// Consistency boundary below the provider.
///
/// Debug builds check that the store is in scope before any region renders.
#[component]
pub fn StrictMode(children: Children) -> impl IntoView {
    if cfg!(debug_assertions) {
        match use_context::<AppStore>() {
            Some(store) => log::debug!("Strict boundary under {}", store.id()),
            None => log::error!("Strict boundary rendered without a store in scope"),
        }
    }
    children()
}

fn client_regions() -> AppRegions {
    Regions {
        logo: logo_region(),
        router: router_region(),
    }
}

/// Mount a bootstrap inside a fresh child owner.
///
/// Cleaning up the returned owner ends the activation and drops the store and
/// regions it produced.
pub(crate) fn bootstrap_scope(
    factory: StoreFactory<PokedexState, Action>,
) -> (Owner, RwSignal<AppBootstrap>) {
    let owner = Owner::new();
    let bootstrap = owner.with(|| {
        let mut boot = AppBootstrap::new(factory, client_regions, APP_STYLES.class("Container"));
        let activation = boot.mount();
        let bootstrap = RwSignal::new(boot);

        on_cleanup(move || {
            activation.end();
            bootstrap.try_update_untracked(AppBootstrap::unmount);
        });
        bootstrap
    });
    (owner, bootstrap)
}

/// The post-activation step run by [`ClientBootstrap`]'s effect.
///
/// Returns `None` once the bootstrap has been torn down.
pub(crate) fn initialize(bootstrap: RwSignal<AppBootstrap>) -> Option<Completion> {
    let initialized = match bootstrap.try_with_untracked(AppBootstrap::prepare)? {
        Ok(initialized) => initialized,
        Err(BootstrapError::NotMounted) => {
            log::debug!("Bootstrap unmounted before initialization");
            return None;
        }
        Err(e) => raise(e),
    };

    bootstrap.try_maybe_update(|boot| {
        let completion = boot.commit(initialized);
        (matches!(completion, Completion::Applied(_)), completion)
    })
}

/// Hand a bootstrap failure to the host environment
fn raise(err: BootstrapError) -> ! {
    log::error!("Client bootstrap failed: {}", err);

    #[cfg(feature = "hydrate")]
    wasm_bindgen::throw_str(&err.to_string());

    #[cfg(not(feature = "hydrate"))]
    panic!("Client bootstrap failed: {}", err);
}
