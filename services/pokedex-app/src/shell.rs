//! Static document shell
//!
//! Rendered once by the server. The shell never re-renders on the client;
//! hydration only touches the contents of the mount point.

use leptos::config::LeptosOptions;
use leptos::hydration::{AutoReload, HydrationScripts};
use leptos::prelude::*;
use leptos_meta::MetaTags;
use serde::{Deserialize, Serialize};

use crate::app::App;

/// Id of the element the interactive subtree is attached to
pub const MOUNT_ID: &str = "root";

/// Document metadata emitted in the shell's `<head>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellMeta {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_favicon")]
    pub favicon: String,
    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

impl Default for ShellMeta {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            title: default_title(),
            description: default_description(),
            favicon: default_favicon(),
            fonts: default_fonts(),
            stylesheets: default_stylesheets(),
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_title() -> String {
    "Pokédex".to_string()
}

fn default_description() -> String {
    "A Pokédex built with Leptos".to_string()
}

fn default_favicon() -> String {
    "/favicon.svg".to_string()
}

fn default_fonts() -> Vec<String> {
    vec![
        "https://fonts.googleapis.com/css2?family=Prompt:wght@400;700&display=swap".to_string(),
        "https://fonts.googleapis.com/css2?family=Exo+2:wght@400;700&display=swap".to_string(),
    ]
}

fn default_stylesheets() -> Vec<String> {
    vec!["/pkg/pokedex.css".to_string()]
}

/// The single element the interactive subtree is mounted into
#[component]
pub fn MountPoint(children: Children) -> impl IntoView {
    view! { <div id=MOUNT_ID>{children()}</div> }
}

/// Outer document wrapping `children` in the mount point, uninspected
#[component]
pub fn DocumentShell(options: LeptosOptions, meta: ShellMeta, children: Children) -> impl IntoView {
    let ShellMeta {
        lang,
        title,
        description,
        favicon,
        fonts,
        stylesheets,
    } = meta;

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8" />
                <link rel="icon" href=favicon />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {fonts
                    .into_iter()
                    .chain(stylesheets)
                    .map(|href| view! { <link href=href rel="stylesheet" /> })
                    .collect_view()}
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <MountPoint>{children()}</MountPoint>
            </body>
        </html>
    }
}

/// Server entry: the document shell around the application root
pub fn shell(options: LeptosOptions, meta: ShellMeta) -> impl IntoView {
    view! {
        <DocumentShell options meta>
            <App />
        </DocumentShell>
    }
}
