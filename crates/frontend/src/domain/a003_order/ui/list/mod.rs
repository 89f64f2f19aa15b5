pub mod model;
pub mod state;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, order_detail_key};
use crate::shared::components::ui::{Input, Select, StatusBadge};
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::session::use_can_edit;
use contracts::domain::a003_order::{CreateOrderRequest, Order, OrderStatus};
use contracts::domain::common::StatusTone;
use contracts::shared::dates;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{create_state, sorted};
use thaw::{Button, ButtonAppearance};

fn status_tone(status: &OrderStatus) -> StatusTone {
    match status {
        OrderStatus::Cancelled => StatusTone::Alert,
        OrderStatus::New | OrderStatus::Pending => StatusTone::Warning,
        _ => StatusTone::Normal,
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let can_edit = use_can_edit();

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => orders.set(sorted(list)),
                Err(e) => {
                    log::error!("orders fetch failed: {}", e);
                    notice.set(Some(Notice::error(format!("Nie udało się pobrać zamówień: {}", e))));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let open_details = move |order: &Order| {
        let title = detail_tab_label("Zamówienie", &order.name);
        ctx.open_tab(&order_detail_key(order.id), &title);
    };

    let create_order = move |_| {
        let request = match CreateOrderRequest::new(&state.with_untracked(|s| s.new_name.clone())) {
            Ok(request) => request,
            Err(msg) => {
                notice.set(Some(Notice::error(msg)));
                return;
            }
        };
        creating.set(true);
        spawn_local(async move {
            match model::create(request).await {
                Ok(id) => {
                    state.update(|s| s.new_name.clear());
                    notice.set(Some(Notice::success(format!("Utworzono zamówienie nr {}", id))));
                    fetch();
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
            creating.set(false);
        });
    };

    let visible = Memo::new(move |_| {
        state.with(|s| orders.with(|list| list.iter().filter(|o| s.matches(o)).cloned().collect::<Vec<_>>()))
    });

    let status_options = Signal::derive(|| {
        OrderStatus::all()
            .into_iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Zamówienia"
                subtitle=Signal::derive(move || format!("Zamówień: {}", orders.with(|o| o.len())))
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Odśwież"
                </Button>
            </PageHeader>

            <NoticeBar notice=notice />

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                    placeholder="Szukaj zamówienia..."
                />
                <Select
                    value=Signal::derive(move || state.with(|s| s.status.clone()))
                    options=status_options
                    placeholder="Wszystkie statusy".to_string()
                    on_change=Callback::new(move |v: String| state.update(|s| s.status = v))
                />
                <Show when=move || can_edit>
                    <Input
                        placeholder="Nazwa nowego zamówienia"
                        value=Signal::derive(move || state.with(|s| s.new_name.clone()))
                        on_input=Callback::new(move |v: String| state.update(|s| s.new_name = v))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            creating.get() || state.with(|s| s.new_name.trim().is_empty())
                        })
                        on_click=create_order
                    >
                        {icon("plus")} "Utwórz zamówienie"
                    </Button>
                </Show>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nr"</th>
                            <th class="table__header-cell">"Nazwa"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Data utworzenia"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = visible.get();
                            if list.is_empty() {
                                let text = if loading.get() { "Ładowanie..." } else { "Brak zamówień" };
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="5">{text}</td></tr>
                                }.into_any();
                            }
                            list.into_iter().map(|order| {
                                let name = order.name.clone();
                                let order = StoredValue::new(order);
                                let (id, status, created) = order.with_value(|o| {
                                    (o.id, o.status.clone(), dates::display_opt(o.created_at))
                                });
                                view! {
                                    <tr
                                        class="table__row table__row--clickable"
                                        on:click=move |_| order.with_value(|o| open_details(o))
                                    >
                                        <td class="table__cell table__cell--number">{id}</td>
                                        <td class="table__cell">
                                            {move || highlight_matches(&name, &state.with(|s| s.search.clone()))}
                                        </td>
                                        <td class="table__cell">
                                            <StatusBadge tone=status_tone(&status) label=status.as_str().to_string() />
                                        </td>
                                        <td class="table__cell">{created}</td>
                                        <td class="table__cell table__cell--actions">
                                            {icon("chevron-right")}
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone(&OrderStatus::Cancelled), StatusTone::Alert);
        assert_eq!(status_tone(&OrderStatus::New), StatusTone::Warning);
        assert_eq!(status_tone(&OrderStatus::Completed), StatusTone::Normal);
        assert_eq!(status_tone(&OrderStatus::Other("Wstrzymane".into())), StatusTone::Normal);
    }
}
