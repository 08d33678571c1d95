use super::*;
use timeline::catalog;

fn renderer() -> TimelineRenderer {
    TimelineRenderer::new(catalog::hr_pipeline().unwrap())
}

#[test]
fn dispatches_first_intersection_of_pending_stage() {
    let r = renderer();
    assert!(should_dispatch(&r, "deep-ocr", true));
}

#[test]
fn skips_non_intersecting_events() {
    let r = renderer();
    assert!(!should_dispatch(&r, "deep-ocr", false));
}

#[test]
fn skips_already_entered_stage() {
    let mut r = renderer();
    r.on_intersect("deep-ocr", true);
    assert!(!should_dispatch(&r, "deep-ocr", true));
}

#[test]
fn skips_unknown_stage() {
    let r = renderer();
    assert!(!should_dispatch(&r, "not-a-stage", true));
}

#[test]
fn skips_everything_after_fail_open() {
    let mut r = renderer();
    r.observation_unavailable(ObservationUnavailable::new("test"));
    assert!(!should_dispatch(&r, "cv-intake", true));
}

fn timeline_html(viewport: ViewportClass) -> String {
    use leptos::tachys::view::RenderHtml;

    let stages = catalog::hr_pipeline().unwrap();
    Owner::new().with(|| view! { <Timeline stages=stages viewport=Some(viewport)/> }.to_html())
}

#[test]
fn outside_the_browser_every_stage_renders_entered() {
    let html = timeline_html(ViewportClass::Wide);
    assert_eq!(html.matches("timeline__row--entered").count(), 7);
    assert_eq!(html.matches("timeline__row--pending").count(), 0);
}

#[test]
fn timeline_exports_motion_variables() {
    let html = timeline_html(ViewportClass::Wide);
    assert!(html.contains("--reveal-duration: 500ms"));
    assert!(html.contains("--reveal-offset: 20px"));
}

#[test]
fn section_headers_open_each_phase_once() {
    let html = timeline_html(ViewportClass::Wide);
    assert_eq!(html.matches("<li class=\"timeline__section ").count(), 3);
}

#[test]
fn narrow_render_drops_detail_panels() {
    let wide = timeline_html(ViewportClass::Wide);
    let narrow = timeline_html(ViewportClass::Narrow);
    assert_eq!(wide.matches("<aside ").count(), 7);
    assert_eq!(narrow.matches("<aside ").count(), 0);
    assert_eq!(narrow.matches("<article ").count(), 7);
}

#[test]
fn fail_open_cascades_in_display_order() {
    let mut r = renderer();
    r.observation_unavailable(ObservationUnavailable::new("test"));
    let tree = r.render(ViewportClass::Wide);
    let delays: Vec<u32> = tree.rows.iter().map(|row| row.reveal_delay_ms).collect();
    assert_eq!(delays, vec![0, 100, 200, 300, 400, 500, 600]);
}

#[test]
fn closing_the_wave_resets_the_stagger() {
    let mut r = renderer();
    let first = r.on_intersect("cv-intake", true).unwrap();
    r.close_wave();
    let second = r.on_intersect("deep-ocr", true).unwrap();
    assert_eq!((first.delay_ms, second.delay_ms), (0, 0));
}
