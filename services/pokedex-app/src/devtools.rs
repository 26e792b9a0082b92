//! Optional development tooling hook
//!
//! The hook is an injected collaborator: the browser build probes
//! `window.__REDUX_DEVTOOLS_EXTENSION__`, everything else (server render,
//! native tests) simply has no hook. Absence is the normal case.

use std::sync::Arc;

use crate::error::Result;

/// Observer installed into a store at construction time
pub trait Enhancer<S, A>: Send + Sync {
    /// Called once with the preloaded state
    fn attached(&self, _state: &S) {}

    /// Called after every dispatch with the action and the resulting state
    fn dispatched(&self, _action: &A, _state: &S) {}
}

/// Enhancer that observes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnhancer;

impl<S, A> Enhancer<S, A> for NoopEnhancer {}

/// Zero-argument hook that produces an enhancer for store construction
pub trait DevtoolsHook<S, A>: Send + Sync {
    fn enhancer(&self) -> Result<Box<dyn Enhancer<S, A>>>;
}

impl<S, A, F> DevtoolsHook<S, A> for F
where
    F: Fn() -> Result<Box<dyn Enhancer<S, A>>> + Send + Sync,
{
    fn enhancer(&self) -> Result<Box<dyn Enhancer<S, A>>> {
        self()
    }
}

/// A hook that may or may not exist in the current execution context
pub type DevtoolsProbe<S, A> = Option<Arc<dyn DevtoolsHook<S, A>>>;

/// Probe the ambient environment for the devtools extension
#[cfg(feature = "hydrate")]
pub fn probe<S, A>() -> DevtoolsProbe<S, A>
where
    S: serde::Serialize + 'static,
    A: serde::Serialize + 'static,
{
    browser::BrowserDevtools::probe().map(|hook| Arc::new(hook) as Arc<dyn DevtoolsHook<S, A>>)
}

/// Probe the ambient environment for the devtools extension
#[cfg(not(feature = "hydrate"))]
pub fn probe<S, A>() -> DevtoolsProbe<S, A> {
    None
}

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::{Function, Reflect, JSON};
    use send_wrapper::SendWrapper;
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{DevtoolsHook, Enhancer};
    use crate::error::{BootstrapError, Result};

    const EXTENSION_KEY: &str = "__REDUX_DEVTOOLS_EXTENSION__";

    fn js_error(value: JsValue) -> BootstrapError {
        BootstrapError::DevtoolsHook(format!("{:?}", value))
    }

    fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
        let json = serde_json::to_string(value)?;
        JSON::parse(&json).map_err(js_error)
    }

    /// Handle to the browser extension object
    pub struct BrowserDevtools {
        extension: SendWrapper<JsValue>,
    }

    impl BrowserDevtools {
        pub fn probe() -> Option<Self> {
            let window = web_sys::window()?;
            let extension = Reflect::get(&window, &JsValue::from_str(EXTENSION_KEY)).ok()?;
            if extension.is_undefined() || extension.is_null() {
                log::debug!("Devtools extension not present");
                return None;
            }
            log::debug!("Devtools extension detected");
            Some(Self {
                extension: SendWrapper::new(extension),
            })
        }
    }

    impl<S, A> DevtoolsHook<S, A> for BrowserDevtools
    where
        S: Serialize + 'static,
        A: Serialize + 'static,
    {
        fn enhancer(&self) -> Result<Box<dyn Enhancer<S, A>>> {
            let connect: Function = Reflect::get(&self.extension, &JsValue::from_str("connect"))
                .map_err(js_error)?
                .dyn_into()
                .map_err(js_error)?;
            let connection = connect.call0(&self.extension).map_err(js_error)?;
            Ok(Box::new(DevtoolsConnection {
                connection: SendWrapper::new(connection),
            }))
        }
    }

    struct DevtoolsConnection {
        connection: SendWrapper<JsValue>,
    }

    impl DevtoolsConnection {
        fn call(&self, method: &str, args: &[JsValue]) -> Result<()> {
            let function: Function = Reflect::get(&self.connection, &JsValue::from_str(method))
                .map_err(js_error)?
                .dyn_into()
                .map_err(js_error)?;
            let args: js_sys::Array = args.iter().collect();
            function.apply(&self.connection, &args).map_err(js_error)?;
            Ok(())
        }
    }

    impl<S, A> Enhancer<S, A> for DevtoolsConnection
    where
        S: Serialize,
        A: Serialize,
    {
        fn attached(&self, state: &S) {
            let result = to_js(state).and_then(|state| self.call("init", &[state]));
            if let Err(e) = result {
                log::warn!("Devtools init failed: {}", e);
            }
        }

        fn dispatched(&self, action: &A, state: &S) {
            let result = to_js(action)
                .and_then(|action| Ok((action, to_js(state)?)))
                .and_then(|(action, state)| self.call("send", &[action, state]));
            if let Err(e) = result {
                log::warn!("Devtools send failed: {}", e);
            }
        }
    }
}
