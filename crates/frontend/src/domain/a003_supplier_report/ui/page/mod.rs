mod content;

use crate::shared::icons::icon;
use crate::shared::navigation::BrowserNavigation;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use content::{render_contents, render_section};
use contracts::domain::a003_supplier_report::{ReportDocument, REPORT_STORE};
use contracts::shared::navigation::{report_name_from_query, NavigationHost};
use leptos::prelude::*;

/// Full supplier report for the name in the `?name=` query.
///
/// Unknown names render the placeholder document: a title and no sections.
#[component]
pub fn SupplierReportPage() -> impl IntoView {
    let nav = BrowserNavigation;
    let name = report_name_from_query(&nav.current_search());
    let report = REPORT_STORE.lookup(&name);
    log::info!("report for {}: {} sections", name, report.sections.len());

    let contents = (!report.is_empty()).then(|| render_contents(&report.sections));
    let ReportDocument { title, sections } = report;

    view! {
        <PageFrame page_id="a003_supplier_report--detail" category=PAGE_CAT_DETAIL>
            <div class="report">
                <h1 class="report__title">{title}</h1>
                <button class="button button--primary" on:click=move |_| nav.go_back()>
                    {icon("arrow-left")}
                    "Back to Suppliers"
                </button>

                {contents}

                <div class="report__sections">
                    {sections.into_iter().map(render_section).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
