use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_supplier_report::ui::page::SupplierReportPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=SupplierList />
                    <Route path=path!("/suppliers") view=SupplierList />
                    <Route path=path!("/materials") view=MaterialList />
                    <Route path=path!("/suppliers/report") view=SupplierReportPage />
                </Routes>
            </Shell>
        </Router>
    }
}
