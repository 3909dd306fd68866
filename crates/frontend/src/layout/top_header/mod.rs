//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use contracts::shared::navigation::{MATERIALS_ROUTE, SUPPLIERS_ROUTE};
use leptos::prelude::*;

struct NavItem {
    label: &'static str,
    icon: &'static str,
    path: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Suppliers",
        icon: "users",
        path: SUPPLIERS_ROUTE,
    },
    NavItem {
        label: "Materials",
        icon: "package",
        path: MATERIALS_ROUTE,
    },
];

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                <a href="/" class="top-header__title">"Supply Chain Dashboard"</a>
            </div>

            <div class="top-header__actions">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a href=item.path class="top-header__link">
                                {icon(item.icon)}
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
