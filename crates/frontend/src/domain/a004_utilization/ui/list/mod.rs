pub mod model;
pub mod state;

use crate::shared::components::ui::Select;
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::config::config;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::list_utils::{distinct_values, highlight_matches, SearchInput};
use crate::shared::pdf_report::{download_report, report_filename, utilization_protocol};
use contracts::domain::a004_utilization::{group_records, UtilizationRecord};
use contracts::shared::dates;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::create_state;
use thaw::{Button, ButtonAppearance};

const COLUMN_COUNT: usize = 6;

#[component]
pub fn UtilizationList() -> impl IntoView {
    let state = create_state();
    let records = RwSignal::new(Vec::<UtilizationRecord>::new());
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    log::debug!("loaded {} utilization records", list.len());
                    records.set(list);
                }
                Err(e) => {
                    log::error!("utilization fetch failed: {}", e);
                    notice.set(Some(Notice::error(format!("Nie udało się pobrać danych: {}", e))));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let visible = Memo::new(move |_| state.with(|s| records.with(|r| s.apply(r))));

    let group_options = Signal::derive(move || {
        records.with(|r| {
            distinct_values(r.iter().map(|rec| rec.group_label()))
                .into_iter()
                .map(|g| (g.clone(), g))
                .collect::<Vec<_>>()
        })
    });

    let export_pdf = move |_| {
        let date = today();
        let report = visible.with_untracked(|r| utilization_protocol(r, date, &config().report));
        if let Err(e) = download_report(&report, &report_filename("protokol-utylizacji", date)) {
            log::error!("utilization protocol failed: {}", e);
            notice.set(Some(Notice::error(e.to_string())));
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Utylizacja"
                subtitle=Signal::derive(move || format!("Pozycji: {}", visible.with(|r| r.len())))
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Odśwież"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || visible.with(|r| r.is_empty()))
                    on_click=export_pdf
                >
                    {icon("pdf")} "Protokół PDF"
                </Button>
            </PageHeader>

            <NoticeBar notice=notice />

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                    placeholder="Szukaj leku..."
                />
                <Select
                    value=Signal::derive(move || state.with(|s| s.group.clone()))
                    options=group_options
                    placeholder="Wszystkie grupy".to_string()
                    on_change=Callback::new(move |v: String| state.update(|s| s.group = v))
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nazwa"</th>
                            <th class="table__header-cell">"Ilość"</th>
                            <th class="table__header-cell">"Opakowanie"</th>
                            <th class="table__header-cell">"Il. nominalna"</th>
                            <th class="table__header-cell">"Data ważności"</th>
                            <th class="table__header-cell">"Powód"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = visible.get();
                            if list.is_empty() {
                                let text = if loading.get() { "Ładowanie..." } else { "Brak pozycji" };
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=COLUMN_COUNT>{text}</td></tr>
                                }.into_any();
                            }
                            let search = state.with_untracked(|s| s.search.clone());
                            group_records(&list)
                                .into_iter()
                                .map(|(group, items)| {
                                    let rows = items
                                        .into_iter()
                                        .map(|r| view! {
                                            <tr class="table__row">
                                                <td class="table__cell" style="padding-left: 24px;">
                                                    {highlight_matches(&r.name, &search)}
                                                </td>
                                                <td class="table__cell table__cell--number">{r.quantity}</td>
                                                <td class="table__cell">{r.package.clone()}</td>
                                                <td class="table__cell">{r.nominal_quantity.clone().unwrap_or_default()}</td>
                                                <td class="table__cell">{dates::display_opt(r.expiry_date)}</td>
                                                <td class="table__cell">{r.reason.clone()}</td>
                                            </tr>
                                        })
                                        .collect_view();
                                    view! {
                                        <tr class="table__row table__row--group table__row--group-0">
                                            <td class="table__cell" colspan=COLUMN_COUNT>{group}</td>
                                        </tr>
                                        {rows}
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
