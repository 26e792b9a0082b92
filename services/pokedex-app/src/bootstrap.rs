//! Client bootstrap state machine
//!
//! The store is built by a post-activation initialization step, never during
//! the server render. Until it exists the bootstrap renders a blank frame, so
//! nothing below the provider can observe a missing store.
//!
//! ```text
//! Uninitialized --initialize--> Ready
//!       ^                         |
//!       +--------unmount----------+   (next mount starts from scratch)
//! ```
//!
//! [`Bootstrap`] is a plain state machine. The component in [`crate::app`]
//! keeps one inside a signal and drives it from an effect; tests drive it
//! directly.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::devtools::DevtoolsProbe;
use crate::error::{BootstrapError, Result};
use crate::region::{Region, RegionKind};
use crate::store::{Store, StoreId};

/// Readiness of the client bootstrap
pub enum Phase<S, A> {
    Uninitialized,
    Ready(Store<S, A>),
}

impl<S, A> Phase<S, A> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready(_))
    }

    pub fn store(&self) -> Option<&Store<S, A>> {
        match self {
            Phase::Uninitialized => None,
            Phase::Ready(store) => Some(store),
        }
    }
}

impl<S, A> Clone for Phase<S, A> {
    fn clone(&self) -> Self {
        match self {
            Phase::Uninitialized => Phase::Uninitialized,
            Phase::Ready(store) => Phase::Ready(store.clone()),
        }
    }
}

impl<S, A> fmt::Debug for Phase<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Uninitialized => write!(f, "Uninitialized"),
            Phase::Ready(store) => f.debug_tuple("Ready").field(&store.id()).finish(),
        }
    }
}

static NEXT_ACTIVATION: AtomicU64 = AtomicU64::new(1);

/// Liveness token for one mount of the bootstrap.
///
/// Initialization results are only applied while the activation that
/// started them is still live.
#[derive(Clone)]
pub struct Activation {
    id: u64,
    live: Arc<AtomicBool>,
}

impl Activation {
    pub fn begin() -> Self {
        let id = NEXT_ACTIVATION.fetch_add(1, Ordering::Relaxed);
        log::debug!("Activation {} started", id);
        Self {
            id,
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        if self.live.swap(false, Ordering::AcqRel) {
            log::debug!("Activation {} ended", self.id);
        }
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("id", &self.id)
            .field("live", &self.is_live())
            .finish()
    }
}

type SharedReducer<S, A> = Arc<dyn Fn(&S, &A) -> S + Send + Sync>;
type DevtoolsLookup<S, A> = Arc<dyn Fn() -> DevtoolsProbe<S, A> + Send + Sync>;

/// Everything needed to construct the store: the reducer and the lookup for
/// the optional devtools hook.
///
/// The lookup runs on every [`StoreFactory::build`], so the environment is
/// only inspected by the initialization step itself.
pub struct StoreFactory<S, A> {
    reducer: SharedReducer<S, A>,
    devtools: DevtoolsLookup<S, A>,
}

impl<S, A> Clone for StoreFactory<S, A> {
    fn clone(&self) -> Self {
        Self {
            reducer: Arc::clone(&self.reducer),
            devtools: Arc::clone(&self.devtools),
        }
    }
}

impl<S, A> fmt::Debug for StoreFactory<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreFactory").finish_non_exhaustive()
    }
}

impl<S, A> StoreFactory<S, A>
where
    S: Default + Send + Sync + 'static,
    A: 'static,
{
    pub fn new<R, D>(reducer: R, devtools: D) -> Self
    where
        R: Fn(&S, &A) -> S + Send + Sync + 'static,
        D: Fn() -> DevtoolsProbe<S, A> + Send + Sync + 'static,
    {
        Self {
            reducer: Arc::new(reducer),
            devtools: Arc::new(devtools),
        }
    }

    /// Construct a fresh store.
    ///
    /// A failing devtools hook is returned as an error and no store is built.
    pub fn build(&self) -> Result<Store<S, A>> {
        let enhancer = match (self.devtools)() {
            Some(hook) => {
                log::debug!("Building store with devtools enhancer");
                Some(hook.enhancer()?)
            }
            None => {
                log::debug!("Building store without devtools");
                None
            }
        };
        let reducer = Arc::clone(&self.reducer);
        Ok(Store::new(
            move |state: &S, action: &A| reducer(state, action),
            S::default(),
            enhancer,
        ))
    }
}

/// A store built for a specific activation, not yet committed
#[derive(Debug)]
pub struct Initialized<S, A> {
    activation: Activation,
    store: Store<S, A>,
}

/// Outcome of committing an initialization result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The bootstrap moved to `Ready` with the new store
    Applied(StoreId),
    /// The activation ended or was already ready; the store was dropped
    Discarded(StoreId),
}

/// One rendered region slot in the interactive layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFrame {
    pub kind: RegionKind,
    pub rendered: bool,
}

/// The interactive subtree: provider, strict boundary, container, regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub provider: StoreId,
    pub strict: bool,
    pub container_class: String,
    pub regions: Vec<RegionFrame>,
}

/// What the bootstrap renders at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Blank,
    Interactive(Layout),
}

/// The pair of regions placed inside the container, logo first
#[derive(Debug, Clone, Copy)]
pub struct Regions<L, R> {
    pub logo: L,
    pub router: R,
}

impl<L: Region, R: Region> Regions<L, R> {
    pub fn frames(&self) -> Vec<RegionFrame> {
        let slots: [&dyn Region; 2] = [&self.logo, &self.router];
        slots
            .into_iter()
            .map(|region| RegionFrame {
                kind: region.kind(),
                rendered: region.is_resolved(),
            })
            .collect()
    }
}

type RegionLoader<L, R> = Arc<dyn Fn() -> Regions<L, R> + Send + Sync>;

/// Lifecycle of one client bootstrap.
///
/// Regions start loading when a store is committed, so every activation
/// renders its regions from scratch.
pub struct Bootstrap<S, A, L, R> {
    factory: StoreFactory<S, A>,
    load_regions: RegionLoader<L, R>,
    container_class: String,
    activation: Option<Activation>,
    phase: Phase<S, A>,
    regions: Option<Regions<L, R>>,
}

impl<S, A, L, R> fmt::Debug for Bootstrap<S, A, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bootstrap")
            .field("factory", &self.factory)
            .field("activation", &self.activation)
            .field("phase", &self.phase)
            .field("regions_loaded", &self.regions.is_some())
            .finish()
    }
}

impl<S, A, L, R> Bootstrap<S, A, L, R>
where
    S: Default + Send + Sync + 'static,
    A: 'static,
    L: Region,
    R: Region,
{
    pub fn new<F>(factory: StoreFactory<S, A>, load_regions: F, container_class: &str) -> Self
    where
        F: Fn() -> Regions<L, R> + Send + Sync + 'static,
    {
        Self {
            factory,
            load_regions: Arc::new(load_regions),
            container_class: container_class.to_string(),
            activation: None,
            phase: Phase::Uninitialized,
            regions: None,
        }
    }

    /// Start a new activation. Any previous activation is ended first.
    pub fn mount(&mut self) -> Activation {
        self.unmount();
        let activation = Activation::begin();
        self.activation = Some(activation.clone());
        activation
    }

    /// End the current activation and drop its store and regions
    pub fn unmount(&mut self) {
        if let Some(activation) = self.activation.take() {
            activation.end();
        }
        self.phase = Phase::Uninitialized;
        self.regions = None;
    }

    /// Build a store for the current activation without committing it
    pub fn prepare(&self) -> Result<Initialized<S, A>> {
        let activation = self
            .activation
            .clone()
            .ok_or(BootstrapError::NotMounted)?;
        let store = self.factory.build()?;
        Ok(Initialized { activation, store })
    }

    /// Apply a prepared store if its activation is still current and the
    /// bootstrap has not already transitioned.
    pub fn commit(&mut self, initialized: Initialized<S, A>) -> Completion {
        let Initialized { activation, store } = initialized;
        let current = self
            .activation
            .as_ref()
            .is_some_and(|a| a.id() == activation.id() && a.is_live());

        if !current || self.phase.is_ready() {
            log::debug!(
                "Discarding {} from activation {}",
                store.id(),
                activation.id()
            );
            return Completion::Discarded(store.id());
        }

        let id = store.id();
        self.phase = Phase::Ready(store);
        self.regions = Some((self.load_regions)());
        log::debug!("Bootstrap ready with {}", id);
        Completion::Applied(id)
    }

    /// The post-activation initialization step: prepare then commit
    pub fn initialize(&mut self) -> Result<Completion> {
        let initialized = self.prepare()?;
        Ok(self.commit(initialized))
    }

    pub fn phase(&self) -> &Phase<S, A> {
        &self.phase
    }

    pub fn store(&self) -> Option<&Store<S, A>> {
        self.phase.store()
    }

    pub fn activation(&self) -> Option<&Activation> {
        self.activation.as_ref()
    }

    pub fn regions(&self) -> Option<&Regions<L, R>> {
        self.regions.as_ref()
    }

    pub fn render(&self) -> Frame {
        match &self.phase {
            Phase::Uninitialized => Frame::Blank,
            Phase::Ready(store) => Frame::Interactive(Layout {
                provider: store.id(),
                strict: true,
                container_class: self.container_class.clone(),
                regions: self
                    .regions
                    .as_ref()
                    .map(Regions::frames)
                    .unwrap_or_default(),
            }),
        }
    }
}
