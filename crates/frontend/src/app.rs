use crate::layout::DetailModalService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Record-detail host: owns the open/close lifecycle of the detail modal
    provide_context(DetailModalService::new());

    view! {
        <AppRoutes />
    }
}
