//! Timeline root component.
//!
//! DESIGN
//! ======
//! The [`TimelineRenderer`] sits in one `RwSignal`; the draw tree is a memo
//! over it and the viewport class. Rows are created once per stage and read
//! their slice of the tree through their own memo, so a reveal only flips that
//! row's classes instead of rebuilding its panels (which would skip the CSS
//! transition).

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use leptos::prelude::*;
use timeline::error::ObservationUnavailable;
use timeline::layout::ViewportClass;
use timeline::markup::{timeline_classes, timeline_style};
use timeline::render::TimelineRenderer;
use timeline::reveal::{RevealPhase, TransitionCommand};
use timeline::stage::StageList;

use crate::components::stage_row::StageRowView;
use crate::util::intersection;
use crate::util::viewport::use_viewport_class;

/// Alternating pipeline timeline for `stages`.
///
/// `viewport` pins the starting layout; without it the browser width decides.
#[component]
pub fn Timeline(stages: StageList, #[prop(optional_no_strip)] viewport: Option<ViewportClass>) -> impl IntoView {
    let viewport = use_viewport_class(viewport);
    let renderer = RwSignal::new(TimelineRenderer::new(stages));
    let tree = Memo::new(move |_| {
        let viewport = viewport.get();
        renderer.with(|r| r.render(viewport))
    });

    let on_intersect = Callback::new(move |(stage_id, is_intersecting): (String, bool)| {
        if !renderer.with_untracked(|r| should_dispatch(r, &stage_id, is_intersecting)) {
            return;
        }
        let mut opened_wave = false;
        renderer.update(|r| {
            if let Some(command) = r.on_intersect(&stage_id, is_intersecting) {
                opened_wave = command.delay_ms == 0;
                report_transition(&command);
            }
        });
        if opened_wave {
            close_wave_next_frame(renderer);
        }
    });

    let on_unavailable = Callback::new(move |cause: ObservationUnavailable| {
        if renderer.with_untracked(|r| r.reveal().unavailable().is_some()) {
            return;
        }
        report_fail_open(&cause);
        renderer.update(|r| {
            r.observation_unavailable(cause);
        });
    });

    // Fail open before the first paint when nothing can observe.
    if let Err(cause) = intersection::availability() {
        on_unavailable.run(cause);
    }

    let row_count = tree.with_untracked(|t| t.rows.len());
    let rows = (0..row_count)
        .map(|index| {
            let row = Memo::new(move |_| tree.with(|t| t.rows[index].clone()));
            view! { <StageRowView row=row on_intersect=on_intersect on_unavailable=on_unavailable/> }
        })
        .collect_view();

    view! {
        <section
            class=move || tree.with(timeline_classes)
            style=timeline_style()
            data-viewport=move || tree.with(|t| t.viewport.as_str())>
            <div
                class="timeline__line"
                aria-hidden="true"
                data-top-stage=move || tree.with(|t| t.line.top_stage_id.clone())
                data-bottom-stage=move || tree.with(|t| t.line.bottom_stage_id.clone())
                data-row-span=move || tree.with(|t| t.line.row_span.to_string())
            ></div>
            <ol class="timeline__rows">{rows}</ol>
        </section>
    }
}

/// Only the first intersecting event of a pending stage changes state.
///
/// Checked before `update` so repeated observer callbacks do not notify
/// subscribers.
fn should_dispatch(renderer: &TimelineRenderer, stage_id: &str, is_intersecting: bool) -> bool {
    is_intersecting && renderer.reveal().phase(stage_id) == Some(RevealPhase::Pending)
}

/// Stages crossing the threshold within one frame cascade together; the
/// next frame starts a fresh wave.
fn close_wave_next_frame(renderer: RwSignal<TimelineRenderer>) {
    #[cfg(feature = "hydrate")]
    request_animation_frame(move || {
        renderer.update_untracked(TimelineRenderer::close_wave);
    });
    #[cfg(not(feature = "hydrate"))]
    renderer.update_untracked(TimelineRenderer::close_wave);
}

fn report_transition(command: &TransitionCommand) {
    #[cfg(feature = "hydrate")]
    log::debug!(
        "stage {} entered ({}, +{}ms)",
        command.stage_id,
        command.panel.as_str(),
        command.delay_ms
    );
    #[cfg(not(feature = "hydrate"))]
    let _ = command;
}

fn report_fail_open(cause: &ObservationUnavailable) {
    #[cfg(feature = "hydrate")]
    log::warn!("{cause}; revealing every stage");
    #[cfg(not(feature = "hydrate"))]
    let _ = cause;
}
