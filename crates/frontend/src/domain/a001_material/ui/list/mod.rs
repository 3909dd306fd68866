use crate::layout::use_detail_modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_material::{seed_materials, Material};
use contracts::domain::common::DomainRecord;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MaterialRow {
    pub name: String,
    pub cas: String,
    pub grade: String,
    pub price: String,
    pub lead_time: String,
    pub risk_level: String,
}

impl From<&Material> for MaterialRow {
    fn from(m: &Material) -> Self {
        Self {
            name: m.name.clone(),
            cas: m.cas.clone(),
            grade: m.grade.clone(),
            price: m.price.clone(),
            lead_time: m.lead_time.clone(),
            risk_level: m.supply_risk.level.clone(),
        }
    }
}

#[component]
pub fn MaterialList() -> impl IntoView {
    let modal = use_detail_modal();
    let materials = seed_materials();

    view! {
        <PageFrame page_id="a001_material--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Materials"</h1>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"CAS"</th>
                            <th class="table__header-cell">"Grade"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Lead Time"</th>
                            <th class="table__header-cell">"Supply Risk"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {materials.into_iter().map(|material| {
                            let row = MaterialRow::from(&material);
                            let record = DomainRecord::Material(material);
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| modal.open(record.clone())
                                >
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.cas}</td>
                                    <td class="table__cell">{row.grade}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{row.lead_time}</td>
                                    <td class="table__cell">{row.risk_level}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
