//! Page shell, root component, and browser entry point.
//!
//! The host renders [`shell`] to HTML with the `ssr` feature. In the browser,
//! [`mount`] replaces the server-rendered timeline inside the root element
//! with a live [`App`] that runs the reveal sequence.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use timeline::consts::{ROOT_ELEMENT_ID, STAGES_ELEMENT_ID};
use timeline::layout::ViewportClass;
use timeline::stage::StageList;

use crate::components::timeline::Timeline;

pub const PAGE_TITLE: &str = "AI-Driven HR Automation";

const BOOT_SCRIPT: &str = r#"import init, { mount } from "/pkg/client.js"; init().then(() => mount());"#;

/// Inputs for one server-rendered page.
#[derive(Clone, Debug)]
pub struct PageOptions {
    pub stages: StageList,
    /// Serialized `stages`, embedded for the browser client.
    pub stages_json: String,
    pub viewport: ViewportClass,
    /// Whether the page should load and mount the WASM bundle from `/pkg`.
    pub client_bundle: bool,
}

/// Full HTML document for the timeline page.
pub fn shell(options: PageOptions) -> impl IntoView {
    let PageOptions { stages, stages_json, viewport, client_bundle } = options;
    let boot = client_bundle.then(|| view! { <script type="module" inner_html=BOOT_SCRIPT></script> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href="/assets/timeline.css"/>
            </head>
            <body>
                <header class="page-header">
                    <p class="page-header__badge">"Recruitment pipeline"</p>
                    <h1 class="page-header__title">"AI-Driven " <span>"HR Automation"</span></h1>
                    <p class="page-header__tagline">
                        "The candidate lifecycle end to end, from the first CV upload to the confirmed interview."
                    </p>
                </header>
                <main id=ROOT_ELEMENT_ID>
                    <App stages=Some(stages) viewport=viewport/>
                </main>
                <footer class="page-footer">"HR Automation Platform"</footer>
                <script type="application/json" id=STAGES_ELEMENT_ID inner_html=embed_json(&stages_json)></script>
                {boot}
            </body>
        </html>
    }
}

/// Render [`shell`] to a complete HTML string.
pub fn render_page(options: PageOptions) -> String {
    Owner::new().with(|| shell(options).to_html())
}

/// Make JSON safe to embed inside a `<script>` element.
#[must_use]
pub fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Root application component.
///
/// `None` stages render nothing at all rather than a partial timeline. The
/// viewport class, when given, seeds the breakpoint signal; the server passes
/// the requested class, the browser measures its own.
#[component]
pub fn App(stages: Option<StageList>, #[prop(optional)] viewport: Option<ViewportClass>) -> impl IntoView {
    stages.map(|stages| view! { <Timeline stages=stages viewport=viewport/> })
}

/// Browser entry point.
///
/// Replaces the host's static markup inside the root element with the live
/// timeline, or mounts on `<body>` when the page has no root element.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use wasm_bindgen::JsCast;

    use crate::util::stage_source;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }

    let stages = match stage_source::load_stages() {
        Ok(stages) => Some(stages),
        Err(err) => {
            log::error!("timeline configuration rejected: {err}");
            None
        }
    };

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <App stages=stages/> }).forget();
        }
        None => leptos::mount::mount_to_body(move || view! { <App stages=stages/> }),
    }
}
