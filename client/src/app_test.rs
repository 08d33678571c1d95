use timeline::catalog;
use timeline::layout::ViewportClass;

use super::*;
use crate::util::stage_source::parse_stage_source;

fn options(viewport: ViewportClass, client_bundle: bool) -> PageOptions {
    let stages = catalog::hr_pipeline().unwrap();
    let stages_json = stages.to_json().unwrap();
    PageOptions { stages, stages_json, viewport, client_bundle }
}

#[test]
fn embed_json_neutralizes_closing_tags() {
    let embedded = embed_json(r#"["</script><b>"]"#);
    assert_eq!(embedded, r#"["<\/script><b>"]"#);
}

#[test]
fn embedded_catalog_still_parses() {
    let embedded = embed_json(catalog::HR_PIPELINE_JSON);
    let stages = parse_stage_source(Some(&embedded)).unwrap();
    assert_eq!(stages.len(), 7);
}

#[test]
fn rendered_page_is_a_full_document() {
    let html = render_page(options(ViewportClass::Wide, false));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<title>{PAGE_TITLE}</title>")));
    assert!(html.contains(r#"id="timeline-root""#));
    assert!(!html.contains("/pkg/client.js"));
}

#[test]
fn rendered_page_boots_the_bundle_only_when_asked() {
    let html = render_page(options(ViewportClass::Narrow, true));
    assert!(html.contains(r#"<script type="module">"#));
    assert!(html.contains("/pkg/client.js"));
}

#[test]
fn app_without_stages_renders_nothing() {
    let html = Owner::new().with(|| view! { <App stages=None/> }.to_html());
    assert!(!html.contains("timeline__rows"));
}
