use crate::domain::a003_order::ui::list::model;
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::config::config;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::pdf_report::{download_report, order_form, report_filename};
use contracts::domain::a003_order::{OrderDetails, OrderId};
use contracts::shared::dates;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Order header with its line items, opened in its own tab
#[component]
pub fn OrderDetailsView(id: OrderId, on_close: Callback<()>) -> impl IntoView {
    let details = RwSignal::new(None::<OrderDetails>);
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_details(id).await {
                Ok(d) => details.set(Some(d)),
                Err(e) => {
                    log::error!("order {} fetch failed: {}", id, e);
                    notice.set(Some(Notice::error(format!("Nie udało się pobrać zamówienia: {}", e))));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let print = move |_| {
        let date = today();
        let Some(report) = details.with_untracked(|d| {
            d.as_ref().map(|d| order_form(d, date, &config().report))
        }) else {
            return;
        };
        if let Err(e) = download_report(&report, &report_filename(&format!("zamowienie-{}", id), date)) {
            log::error!("order form failed: {}", e);
            notice.set(Some(Notice::error(e.to_string())));
        }
    };

    let title = Signal::derive(move || {
        details.with(|d| {
            d.as_ref()
                .map(|d| format!("Zamówienie nr {}: {}", d.order.id, d.order.name))
                .unwrap_or_else(|| format!("Zamówienie nr {}", id))
        })
    });

    view! {
        <div class="page">
            {move || view! {
                <PageHeader
                    title=title.get()
                    subtitle=Signal::derive(move || details.with(|d| d.as_ref().map(|d| {
                        format!(
                            "Status: {} · utworzone {}",
                            d.order.status.as_str(),
                            dates::display_opt(d.order.created_at)
                        )
                    })))
                >
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")} "Odśwież"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || details.with(|d| d.is_none()))
                        on_click=print
                    >
                        {icon("pdf")} "Formularz PDF"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")} "Zamknij"
                    </Button>
                </PageHeader>
            }}

            <NoticeBar notice=notice />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Lp."</th>
                            <th class="table__header-cell">"Rodzaj"</th>
                            <th class="table__header-cell">"Nazwa"</th>
                            <th class="table__header-cell">"Ilość"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lines = details.with(|d| d.as_ref().map(|d| d.lines.clone()).unwrap_or_default());
                            if lines.is_empty() {
                                let text = if loading.get() { "Ładowanie..." } else { "Zamówienie nie ma pozycji" };
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">{text}</td></tr>
                                }.into_any();
                            }
                            lines.into_iter().enumerate().map(|(i, line)| view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--number">{i + 1}</td>
                                    <td class="table__cell">{line.kind_label()}</td>
                                    <td class="table__cell">{line.name.clone()}</td>
                                    <td class="table__cell table__cell--number">{line.quantity}</td>
                                </tr>
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
