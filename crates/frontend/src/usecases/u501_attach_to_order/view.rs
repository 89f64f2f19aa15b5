use super::api;
use super::model::{AttachForm, AttachTarget, OrderSource};
use crate::domain::a003_order::ui::list::model as orders;
use crate::shared::components::ui::{Input, Select};
use crate::shared::form_utils::parse_quantity;
use crate::shared::modal::Modal;
use contracts::domain::a003_order::{open_orders, CreateOrderRequest, Order};
use contracts::domain::common::parse_select_value;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn AttachToOrderModal(
    target: AttachTarget,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(AttachForm::default());
    let open = RwSignal::new(Vec::<Order>::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let target = StoredValue::new(target);

    spawn_local(async move {
        match orders::fetch_all().await {
            Ok(list) => open.set(open_orders(&list).into_iter().cloned().collect()),
            Err(e) => error.set(Some(format!("Nie udało się pobrać zamówień: {}", e))),
        }
    });

    let order_options = Signal::derive(move || {
        open.get()
            .into_iter()
            .map(|o| (o.id.to_string(), format!("{} ({})", o.name, o.status.as_str())))
            .collect::<Vec<_>>()
    });

    let create_order = move |_| {
        let request = match CreateOrderRequest::new(&form.with_untracked(|f| f.new_name.clone())) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        form.update(|f| f.creating = true);
        spawn_local(async move {
            match orders::create(request).await {
                Ok(id) => form.update(|f| f.created = Some(id)),
                Err(e) => error.set(Some(e.to_string())),
            }
            form.update(|f| f.creating = false);
        });
    };

    let submit = move |_| {
        let request = match form.with_untracked(|f| target.with_value(|t| f.build(t))) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match api::attach(request).await {
                Ok(()) => {
                    log::info!("{} attached to order", target.with_value(|t| t.name().to_string()));
                    on_done.run(());
                }
                Err(e) => {
                    log::error!("attach failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let source_button = move |source: OrderSource, label: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if form.with(|f| f.source == source) {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                disabled=Signal::derive(move || form.with(|f| f.creating))
                on_click=move |_| form.update(|f| f.source = source)
            >
                {label}
            </Button>
        }
    };

    view! {
        <Modal
            title=format!("Dodaj do zamówienia: {}", target.with_value(|t| t.name().to_string()))
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || submitting.get() || !form.with(|f| f.can_submit()))
                    on_click=submit
                >
                    {move || if submitting.get() { "Dodawanie..." } else { "Dodaj" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Anuluj"
                </Button>
            }
        >
            <div class="form">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                <div class="form__row">
                    {source_button(OrderSource::Existing, "Istniejące zamówienie")}
                    {source_button(OrderSource::New, "Nowe zamówienie")}
                </div>
                <Show
                    when=move || form.with(|f| f.source == OrderSource::Existing)
                    fallback=move || view! {
                        <div class="form__row">
                            <Input
                                label="Nazwa zamówienia"
                                value=Signal::derive(move || form.with(|f| f.new_name.clone()))
                                disabled=Signal::derive(move || form.with(|f| f.created.is_some()))
                                on_input=Callback::new(move |v: String| {
                                    form.update(|f| f.new_name = v);
                                    error.set(None);
                                })
                            />
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || !form.with(|f| f.can_create()))
                                on_click=create_order
                            >
                                {move || if form.with(|f| f.creating) { "Tworzenie..." } else { "Utwórz" }}
                            </Button>
                        </div>
                        {move || form.with(|f| f.created).map(|id| view! {
                            <div class="warning-box warning-box--success">
                                <span class="warning-box__text">{format!("Utworzono zamówienie nr {}", id)}</span>
                            </div>
                        })}
                    }
                >
                    <Select
                        label="Zamówienie"
                        value=Signal::derive(move || {
                            form.with(|f| f.selected.map(|id| id.to_string()).unwrap_or_default())
                        })
                        options=order_options
                        placeholder="-- wybierz zamówienie --".to_string()
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.selected = parse_select_value(&v));
                            error.set(None);
                        })
                    />
                    <Show when=move || open.with(|o| o.is_empty())>
                        <div class="form__hint">"Brak otwartych zamówień"</div>
                    </Show>
                </Show>
                <Input
                    label="Ilość"
                    input_type="number"
                    min="1"
                    value=Signal::derive(move || form.with(|f| f.quantity.to_string()))
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.quantity = parse_quantity(&v, f.quantity));
                        error.set(None);
                    })
                />
            </div>
        </Modal>
    }
}
