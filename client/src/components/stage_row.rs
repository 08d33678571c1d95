//! One timeline row: primary panel, center marker, optional detail panel.
//! A row that opens a phase section is preceded by the section header.

use leptos::prelude::*;
use timeline::error::ObservationUnavailable;
use timeline::markup::{
    DefaultTokens, TokenResolver, marker_classes, panel_classes, row_classes, row_style, section_classes,
};
use timeline::render::{Panel, PanelBody, SectionHeader, StageRow};

#[cfg(feature = "hydrate")]
use crate::util::intersection::{StageObserver, observe_stage};

/// Row for one stage of the draw tree.
///
/// Owns the stage's intersection observer from mount to unmount.
#[component]
pub fn StageRowView(
    row: Memo<StageRow>,
    on_intersect: Callback<(String, bool)>,
    on_unavailable: Callback<ObservationUnavailable>,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Li>::new();
    let stage_id = row.with_untracked(|r| r.stage_id.clone());
    let order = row.with_untracked(|r| r.order.to_string());

    let header = row.with_untracked(|r| r.section.clone()).map(|header| section_view(header, row));
    let primary = Memo::new(move |_| row.with(|r| r.primary.clone()));
    let secondary = Memo::new(move |_| row.with(|r| r.secondary.clone()));

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<StageObserver>);
        let stage_id = stage_id.clone();
        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            let forward = move |id: &str, hit: bool| on_intersect.run((id.to_owned(), hit));
            match observe_stage(&element, stage_id.clone(), forward) {
                Ok(live) => observer.set_value(Some(live)),
                Err(cause) => on_unavailable.run(cause),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (on_intersect, on_unavailable);

    view! {
        {header}
        <li
            node_ref=node_ref
            class=move || row.with(row_classes)
            style=move || row.with(row_style)
            data-stage-id=stage_id
            data-order=order
        >
            {move || panel_view(primary.get())}
            <span class=move || row.with(|r| marker_classes(&r.marker, &DefaultTokens)) aria-hidden="true"></span>
            {move || secondary.get().map(panel_view)}
        </li>
    }
}

/// Header row for a phase section; shares the opening stage's reveal state
/// and delay so both enter together.
fn section_view(header: SectionHeader, row: Memo<StageRow>) -> impl IntoView {
    let classes = {
        let header = header.clone();
        move || row.with(|r| section_classes(&header, r.reveal, &DefaultTokens))
    };
    let SectionHeader { label, title, subtitle, .. } = header;
    let section = label.clone();
    view! {
        <li class=classes style=move || row.with(row_style) data-section=section>
            <span class="timeline__section-label">{label}</span>
            <div class="timeline__section-text">
                <h2 class="timeline__section-title">{title}</h2>
                {(!subtitle.is_empty()).then(move || view! { <p class="timeline__section-subtitle">{subtitle}</p> })}
            </div>
        </li>
    }
}

fn panel_view(panel: Panel) -> AnyView {
    let classes = panel_classes(&panel, &DefaultTokens);
    let glyph = DefaultTokens.glyph(&panel.icon_token);
    match panel.body {
        PanelBody::Summary { eyebrow, title, summary } => view! {
            <article class=classes>
                <div class="stage-panel__icon" aria-hidden="true">{glyph}</div>
                {eyebrow.map(|text| view! { <p class="stage-panel__eyebrow">{text}</p> })}
                <h3 class="stage-panel__title">{title}</h3>
                <p class="stage-panel__summary">{summary}</p>
            </article>
        }
        .into_any(),
        PanelBody::Details { title, items } => view! {
            <aside class=classes>
                <h4 class="stage-panel__title">{title}</h4>
                <ul class="stage-panel__details">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </aside>
        }
        .into_any(),
    }
}
