use crate::layout::use_detail_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_supplier::{seed_suppliers, Supplier};
use contracts::domain::common::DomainRecord;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SupplierRow {
    pub name: String,
    pub region: String,
    pub capacity: String,
    pub risk_rating: String,
    pub contract_expiry: String,
    pub alerts: usize,
}

impl From<&Supplier> for SupplierRow {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            region: s.region.clone(),
            capacity: s.capacity.clone(),
            risk_rating: s.risk_rating.clone(),
            contract_expiry: s.contract.expiry.clone(),
            alerts: s.risk_alerts.len(),
        }
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let modal = use_detail_modal();
    let suppliers = seed_suppliers();

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Suppliers"</h1>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Region"</th>
                            <th class="table__header-cell">"Capacity"</th>
                            <th class="table__header-cell">"Risk Rating"</th>
                            <th class="table__header-cell">"Contract Expiry"</th>
                            <th class="table__header-cell">"Alerts"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {suppliers.into_iter().map(|supplier| {
                            let row = SupplierRow::from(&supplier);
                            let record = DomainRecord::Supplier(supplier);
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| modal.open(record.clone())
                                >
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.region}</td>
                                    <td class="table__cell">{row.capacity}</td>
                                    <td class="table__cell">{row.risk_rating}</td>
                                    <td class="table__cell">{row.contract_expiry}</td>
                                    <td class="table__cell">
                                        {(row.alerts > 0).then(|| view! {
                                            <span class="badge badge--danger">{row.alerts}</span>
                                        })}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
