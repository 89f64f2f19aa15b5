//! Tab key -> view mapping. Every tab key is resolved here.

use super::tab_labels::ORDER_DETAIL_PREFIX;
use crate::domain::a001_medicine::ui::list::MedicineList;
use crate::domain::a002_equipment::ui::list::EquipmentList;
use crate::domain::a003_order::ui::details::OrderDetailsView;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_utilization::ui::list::UtilizationList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p901_status_by_date::ui::StatusByDatePage;
use crate::projections::p902_equipment_overview::ui::EquipmentOverview;
use leptos::prelude::*;

/// Render the content of the tab with `key`.
///
/// `tabs_store` is handed to detail views so they can close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_medicine" => view! { <MedicineList /> }.into_any(),
        "a002_equipment" => view! { <EquipmentList /> }.into_any(),
        "a003_order" => view! { <OrderList /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            match k
                .strip_prefix(ORDER_DETAIL_PREFIX)
                .and_then(|raw| raw.parse::<i64>().ok())
            {
                Some(id) => view! {
                    <OrderDetailsView
                        id=id
                        on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                    />
                }
                .into_any(),
                None => unknown_tab(k),
            }
        }
        "a004_utilization" => view! { <UtilizationList /> }.into_any(),
        "p901_status_by_date" => view! { <StatusByDatePage /> }.into_any(),
        "p902_equipment_overview" => view! { <EquipmentOverview /> }.into_any(),
        other => unknown_tab(other),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log::warn!("no view registered for tab {}", key);
    let key = key.to_string();
    view! {
        <div class="page">
            <div class="warning-box">{format!("Nieznana zakładka: {}", key)}</div>
        </div>
    }
    .into_any()
}
