use super::model::{self, InventoryKind, StatusSnapshot};
use crate::shared::components::ui::Input;
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::config::config;
use crate::shared::date_utils::{date_input_value, parse_date_input, today};
use crate::shared::icons::icon;
use crate::shared::pdf_report::{download_report, report_filename, ReportDocument, ReportRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// HTML rendition of a report table
fn preview_table(report: ReportDocument) -> AnyView {
    let span = report.columns.len();
    let headers = report
        .columns
        .iter()
        .map(|c| view! { <th class="table__header-cell">{c.title}</th> })
        .collect_view();
    let rows = report
        .rows
        .into_iter()
        .map(|row| match row {
            ReportRow::Section { level, label } => view! {
                <tr class=format!("table__row table__row--group table__row--group-{}", level)>
                    <td class="table__cell" colspan=span style=format!("padding-left: {}px;", 8 + level * 16)>
                        {label}
                    </td>
                </tr>
            }
            .into_any(),
            ReportRow::Cells(cells) => view! {
                <tr class="table__row">
                    {cells.into_iter().map(|c| view! { <td class="table__cell">{c}</td> }).collect_view()}
                </tr>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>{headers}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn StatusByDatePage() -> impl IntoView {
    let date = RwSignal::new(today());
    let kind = RwSignal::new(InventoryKind::default());
    let snapshot = RwSignal::new(None::<(StatusSnapshot, chrono::NaiveDate)>);
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let load = move || {
        let (k, d) = (kind.get_untracked(), date.get_untracked());
        loading.set(true);
        notice.set(None);
        spawn_local(async move {
            match model::fetch(k, d).await {
                Ok(s) => {
                    log::debug!("status on {} loaded: {} rows", d, s.item_count());
                    snapshot.set(Some((s, d)));
                }
                Err(e) => {
                    log::error!("status-by-date fetch failed: {}", e);
                    notice.set(Some(Notice::error(format!("Nie udało się pobrać stanu: {}", e))));
                }
            }
            loading.set(false);
        });
    };

    let export_pdf = move |_| {
        let Some((report, prefix, d)) = snapshot.with_untracked(|s| {
            s.as_ref()
                .map(|(snap, d)| (snap.report(*d, &config().report), snap.kind().file_prefix(), *d))
        }) else {
            return;
        };
        if let Err(e) = download_report(&report, &report_filename(prefix, d)) {
            log::error!("status report failed: {}", e);
            notice.set(Some(Notice::error(e.to_string())));
        }
    };

    let kind_button = move |k: InventoryKind| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if kind.get() == k { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                })
                on_click=move |_| {
                    kind.set(k);
                    snapshot.set(None);
                }
            >
                {k.label()}
            </Button>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Stan na dzień">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || snapshot.with(|s| s.is_none()))
                    on_click=export_pdf
                >
                    {icon("pdf")} "Raport PDF"
                </Button>
            </PageHeader>

            <NoticeBar notice=notice />

            <div class="filter-bar">
                {kind_button(InventoryKind::Medicines)}
                {kind_button(InventoryKind::Equipment)}
                <Input
                    input_type="date"
                    value=Signal::derive(move || date_input_value(Some(date.get())))
                    on_input=Callback::new(move |v: String| {
                        if let Some(d) = parse_date_input(&v) {
                            date.set(d);
                        }
                    })
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| load()
                >
                    {icon("calendar")}
                    {move || if loading.get() { "Wczytywanie..." } else { "Pokaż stan" }}
                </Button>
            </div>

            <div class="table">
                {move || match snapshot.get() {
                    Some((s, d)) if s.item_count() > 0 => preview_table(s.report(d, &config().report)),
                    Some(_) => view! { <div class="table__empty">"Brak pozycji na wybrany dzień"</div> }.into_any(),
                    None => view! {
                        <div class="table__empty">"Wybierz rodzaj i datę, a następnie kliknij „Pokaż stan”"</div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
