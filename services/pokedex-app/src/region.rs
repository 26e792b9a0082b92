//! Independently loaded regions of the interactive UI
//!
//! Each region resolves on its own; no region waits on another and they share
//! no state beyond their fixed position in the layout.

use std::fmt;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Which region a slot holds, in layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Logo,
    Router,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Logo => write!(f, "logo"),
            RegionKind::Router => write!(f, "router"),
        }
    }
}

/// Resolution status of a region, independent of what it resolves to
pub trait Region: Send + Sync {
    fn kind(&self) -> RegionKind;
    fn is_resolved(&self) -> bool;
}

/// A region whose content is loaded by a [`Resource`]
pub struct ResourceRegion<T>
where
    T: Send + Sync + 'static,
{
    kind: RegionKind,
    resource: Resource<T>,
}

impl<T> ResourceRegion<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(kind: RegionKind, resource: Resource<T>) -> Self {
        Self { kind, resource }
    }

    pub fn resource(&self) -> Resource<T> {
        self.resource
    }
}

impl<T> Clone for ResourceRegion<T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceRegion<T> where T: Send + Sync + 'static {}

impl<T> fmt::Debug for ResourceRegion<T>
where
    T: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegion")
            .field("kind", &self.kind)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl<T> Region for ResourceRegion<T>
where
    T: Send + Sync + 'static,
{
    fn kind(&self) -> RegionKind {
        self.kind
    }

    fn is_resolved(&self) -> bool {
        // Resource reads warn outside Suspense when hydrating; the derived value does not
        let data: &AsyncDerived<T> = &self.resource;
        data.try_with_untracked(Option::is_some).unwrap_or(false)
    }
}
