use super::view_model::NewMedicineViewModel;
use crate::shared::components::ui::Input;
use crate::shared::components::CategorySelect;
use crate::shared::date_utils::{date_input_value, parse_date_input};
use crate::shared::form_utils::parse_quantity;
use crate::shared::modal::Modal;
use crate::system::session::use_author;
use contracts::domain::common::{CategoryCatalog, CategorySelection};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn NewMedicineModal(
    #[prop(into)]
    catalog: Signal<CategoryCatalog>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = NewMedicineViewModel::new();
    let author = StoredValue::new(use_author());
    let form = vm.form;

    let save = move |_: leptos::ev::MouseEvent| vm.save_command(author.get_value(), on_saved);

    view! {
        <Modal
            title="Nowy lek"
            on_close=on_close
            footer=move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=save
                >
                    {move || if vm.saving.get() { "Zapisywanie..." } else { "Zapisz" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Anuluj"
                </Button>
            }
        >
            <div class="form">
                {move || vm.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                <Input
                    label="Nazwa"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v: String| vm.update(|d| d.name = v))
                />
                <div class="form__row">
                    <Input
                        label="Ilość"
                        input_type="number"
                        min="0"
                        value=Signal::derive(move || form.get().quantity.to_string())
                        on_input=Callback::new(move |v: String| {
                            vm.update(|d| d.quantity = parse_quantity(&v, d.quantity))
                        })
                    />
                    <Input
                        label="Ilość minimalna"
                        input_type="number"
                        min="0"
                        value=Signal::derive(move || form.get().min_quantity.to_string())
                        on_input=Callback::new(move |v: String| {
                            vm.update(|d| d.min_quantity = parse_quantity(&v, d.min_quantity))
                        })
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Opakowanie"
                        placeholder="np. tabletki, ampułki"
                        value=Signal::derive(move || form.get().package)
                        on_input=Callback::new(move |v: String| vm.update(|d| d.package = v))
                    />
                    <Input
                        label="Data ważności"
                        input_type="date"
                        value=Signal::derive(move || date_input_value(form.get().expiry_date))
                        on_input=Callback::new(move |v: String| {
                            vm.update(|d| d.expiry_date = parse_date_input(&v))
                        })
                    />
                </div>
                <Input
                    label="Klasa przechowywania"
                    value=Signal::derive(move || form.get().storage_class)
                    on_input=Callback::new(move |v: String| vm.update(|d| d.storage_class = v))
                />
                <CategorySelect
                    catalog=catalog
                    selection=Signal::derive(move || form.get().categories)
                    on_change=Callback::new(move |sel: CategorySelection| vm.update(|d| d.categories = sel))
                    with_labels=true
                />
            </div>
        </Modal>
    }
}
