use super::model::{self, summarize};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::icons::icon;
use contracts::domain::a002_equipment::Equipment;
use contracts::domain::common::{term_tone, CategoryTree, DisplayRow};
use contracts::shared::dates;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

const COLUMN_COUNT: usize = 6;

/// Read-only equipment overview; rows below the required quantity are highlighted
#[component]
pub fn EquipmentOverview() -> impl IntoView {
    let tree = RwSignal::new(CategoryTree::<Equipment>::default());
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_overview().await {
                Ok(t) => tree.set(t),
                Err(e) => {
                    log::error!("equipment overview fetch failed: {}", e);
                    notice.set(Some(Notice::error(format!("Nie udało się pobrać zestawienia: {}", e))));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let summary = Memo::new(move |_| tree.with(summarize));

    view! {
        <div class="page">
            <PageHeader title="Zestawienie sprzętu">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Odśwież"
                </Button>
            </PageHeader>

            <NoticeBar notice=notice />

            <div class="summary-cards">
                <For
                    each=move || summary.get()
                    key=|s| s.label.clone()
                    children=move |s| view! {
                        <div class="summary-card" class:summary-card--alert={s.short > 0}>
                            <div class="summary-card__title">{s.label.clone()}</div>
                            <div class="summary-card__value">{format!("{} poz.", s.items)}</div>
                            <div class="summary-card__hint">
                                {if s.short > 0 {
                                    format!("Braki: {} poz. ({} szt.)", s.short, s.missing_units)
                                } else {
                                    "Kompletne".to_string()
                                }}
                            </div>
                        </div>
                    }
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nazwa"</th>
                            <th class="table__header-cell">"Stan"</th>
                            <th class="table__header-cell">"Wymagane"</th>
                            <th class="table__header-cell">"Brak"</th>
                            <th class="table__header-cell">"Data ważności"</th>
                            <th class="table__header-cell">"Termin"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = tree.with(|t| t.display_rows());
                            if rows.is_empty() {
                                let text = if loading.get() { "Ładowanie..." } else { "Brak sprzętu" };
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMN_COUNT>{text}</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| match row {
                                DisplayRow::Group { depth, label } => view! {
                                    <tr class=format!("table__row table__row--group table__row--group-{}", depth)>
                                        <td class="table__cell" colspan=COLUMN_COUNT style=format!("padding-left: {}px;", 8 + depth * 16)>
                                            {label}
                                        </td>
                                    </tr>
                                }.into_any(),
                                DisplayRow::Item { depth, item } => {
                                    let shortage = item.shortage();
                                    view! {
                                        <tr class="table__row" class:table__row--shortage={shortage > 0}>
                                            <td class="table__cell" style=format!("padding-left: {}px;", 8 + depth * 16)>
                                                {item.name.clone()}
                                            </td>
                                            <td class="table__cell table__cell--number">{item.current_quantity}</td>
                                            <td class="table__cell table__cell--number">{item.required_quantity}</td>
                                            <td class="table__cell table__cell--number">{(shortage > 0).then_some(shortage)}</td>
                                            <td class="table__cell">{dates::display_expiry(&item.expiry_date)}</td>
                                            <td class="table__cell">
                                                <StatusBadge tone=term_tone(&item.term_status) label=item.term_status.clone() />
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
