//! Detail modal for catalog records.
//!
//! The modal only draws a [`DetailView`]; which fields are shown and how
//! missing values fall back is decided in `contracts::shared::detail`.

use crate::layout::use_detail_modal;
use crate::shared::icons::icon;
use crate::shared::modal::{close_on_escape, Modal};
use crate::shared::navigation::BrowserNavigation;
use contracts::shared::detail::{
    build_detail_view, DetailBlock, DetailField, DetailGroup, DetailView, GroupTone,
};
use contracts::shared::navigation::NavigationHost;
use leptos::prelude::*;

fn render_field(field: DetailField) -> impl IntoView {
    view! {
        <div class="detail-field">
            <strong>{field.label}":"</strong>
            " "
            {field.value}
        </div>
    }
}

fn render_block(block: DetailBlock) -> AnyView {
    match block {
        DetailBlock::Field(field) => render_field(field).into_any(),
        DetailBlock::Subgroup { heading, fields } => view! {
            <div class="detail-subgroup">
                <h4 class="detail-subgroup__title">{heading}</h4>
                {fields.into_iter().map(render_field).collect_view()}
            </div>
        }
        .into_any(),
        DetailBlock::List { label, items } => view! {
            {label.map(|label| view! { <div class="detail-field"><strong>{label}":"</strong></div> })}
            <ul class="detail-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn render_group(group: DetailGroup) -> impl IntoView {
    let is_alert = group.tone == GroupTone::Alert;
    let body_class = group.layout.css_class();
    let class = if is_alert {
        "detail-group detail-group--alert"
    } else {
        "detail-group"
    };

    view! {
        <div class=class>
            <h3 class="detail-group__title">
                {is_alert.then(|| icon("alert-triangle"))}
                {group.heading}
            </h3>
            <div class=body_class>
                {group.blocks.into_iter().map(render_block).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DetailContent(detail: DetailView, on_close: Callback<()>) -> impl IntoView {
    let DetailView {
        title,
        report_path,
        groups,
    } = detail;

    let open_report = move |_| BrowserNavigation.navigate_to(&report_path);

    let actions = view! {
        <button class="button button--link" on:click=open_report>
            {icon("file-text")}
            "View Full Report"
        </button>
    }
    .into_any();

    view! {
        <Modal title=title on_close=on_close actions=actions>
            <div class="detail-groups">
                {groups.into_iter().map(render_group).collect_view()}
            </div>
        </Modal>
    }
}

/// Modal showing the record selected in [`DetailModalService`](crate::layout::DetailModalService).
///
/// Renders nothing while no record is selected. The view is rebuilt from the
/// selected record every time it changes.
#[component]
pub fn DetailModal() -> impl IntoView {
    let modal = use_detail_modal();
    let on_close = Callback::new(move |_| modal.close());

    close_on_escape(on_close);

    view! {
        {move || {
            modal.selected().map(|record| {
                let detail = build_detail_view(&record);
                view! { <DetailContent detail=detail on_close=on_close /> }
            })
        }}
    }
}
