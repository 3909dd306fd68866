pub mod modal_service;
pub mod top_header;

pub use modal_service::{use_detail_modal, DetailModalService};

use crate::shared::detail_modal::DetailModal;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              Page content                |
/// +------------------------------------------+
/// ```
///
/// The detail modal is mounted once here and shown over any page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                {children()}
            </main>

            <DetailModal />
        </div>
    }
}
