use super::api;
use super::model::{UtilizeForm, REASONS};
use crate::shared::components::ui::{Input, Select};
use crate::shared::form_utils::parse_quantity;
use crate::shared::modal::Modal;
use contracts::domain::a001_medicine::Medicine;
use contracts::shared::dates;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn UtilizeMedicineModal(
    medicine: Medicine,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(UtilizeForm::for_medicine(&medicine));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let medicine = StoredValue::new(medicine);

    let reason_options = Signal::derive(|| {
        REASONS
            .iter()
            .map(|r| (r.to_string(), r.to_string()))
            .collect::<Vec<_>>()
    });

    let submit = move |_| {
        let request = match medicine.with_value(|m| form.with_untracked(|f| f.build(m))) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::utilize(request).await {
                Ok(()) => {
                    log::info!("medicine {} utilized", medicine.with_value(|m| m.id));
                    on_done.run(());
                }
                Err(e) => {
                    log::error!("utilization failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let (name, stock, package, expiry) = medicine.with_value(|m| {
        (
            m.name.clone(),
            m.quantity,
            m.package.clone(),
            dates::display_expiry(&m.expiry_date),
        )
    });

    view! {
        <Modal
            title=format!("Utylizacja: {}", name)
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=submit
                >
                    {move || if saving.get() { "Zapisywanie..." } else { "Utylizuj" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Anuluj"
                </Button>
            }
        >
            <div class="form">
                <div class="form__summary">
                    <span>{format!("Stan: {} {}", stock, package)}</span>
                    <span>{format!("Data ważności: {}", expiry)}</span>
                </div>
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                <Input
                    label="Ilość do utylizacji"
                    input_type="number"
                    min="1"
                    value=Signal::derive(move || form.with(|f| f.quantity.to_string()))
                    on_input=Callback::new(move |v: String| {
                        form.update(|f| f.quantity = parse_quantity(&v, f.quantity));
                        error.set(None);
                    })
                />
                <Select
                    label="Powód"
                    value=Signal::derive(move || form.with(|f| f.reason.clone()))
                    options=reason_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.reason = v))
                />
                <Input
                    label="Grupa"
                    placeholder="np. 2025/06"
                    value=Signal::derive(move || form.with(|f| f.group.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.group = v))
                />
            </div>
        </Modal>
    }
}
