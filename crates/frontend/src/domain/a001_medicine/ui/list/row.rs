use crate::shared::components::ui::{Input, StatusBadge};
use crate::shared::components::CategorySelect;
use crate::shared::config::config;
use crate::shared::date_utils::{date_input_value, expires_within, parse_date_input, today};
use crate::shared::form_utils::parse_quantity;
use crate::shared::icons::{
    icon, ROW_ATTACH, ROW_CANCEL, ROW_DELETE, ROW_EDIT, ROW_SAVE, ROW_UTILIZE,
};
use crate::shared::list_utils::highlight_matches;
use crate::shared::state::InventoryEditor;
use contracts::domain::a001_medicine::{Medicine, MedicineDraft};
use contracts::domain::common::{stock_tone, term_tone, CategorySelection};
use contracts::shared::dates;
use leptos::prelude::*;

pub const COLUMN_COUNT: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    Edit(i64),
    Save(i64),
    Cancel(i64),
    Delete(i64),
    Utilize(Medicine),
    Attach(Medicine),
}

fn indent(depth: usize) -> String {
    format!("padding-left: {}px;", 8 + depth * 16)
}

/// One medicine line: read-only cells, or inputs bound to the row's draft
/// while it is being edited on its own or in bulk mode.
#[component]
pub fn MedicineRow(
    medicine: Medicine,
    depth: usize,
    editor: InventoryEditor<Medicine>,
    #[prop(into)]
    search: Signal<String>,
    can_edit: bool,
    on_action: Callback<RowAction>,
) -> impl IntoView {
    let id = medicine.id;
    let is_editing = Memo::new(move |_| editor.is_editing(id));
    let is_dirty = Memo::new(move |_| editor.is_dirty(id));
    let in_bulk = Memo::new(move |_| editor.is_bulk());
    let draft = Signal::derive(move || editor.draft(id).unwrap_or_default());
    let expiring = expires_within(
        medicine.expiry(),
        today(),
        config().inventory.expiry_warning_days,
    );
    let medicine = StoredValue::new(medicine);

    let text_field = move |get: fn(&MedicineDraft) -> String| Signal::derive(move || get(&draft.get()));
    let edit = move |change: Box<dyn FnOnce(&mut MedicineDraft)>| editor.edit(id, change);

    let edit_cells = move || {
        view! {
            <td class="table__cell" style=indent(depth)>
                <Input
                    value=text_field(|d| d.name.clone())
                    on_input=Callback::new(move |v: String| edit(Box::new(move |d| d.name = v)))
                />
                <CategorySelect
                    catalog=editor.catalog
                    selection=Signal::derive(move || draft.get().categories)
                    on_change=Callback::new(move |sel: CategorySelection| {
                        edit(Box::new(move |d| d.categories = sel))
                    })
                />
            </td>
            <td class="table__cell table__cell--number">
                <Input
                    input_type="number"
                    min="0"
                    value=text_field(|d| d.quantity.to_string())
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.quantity = parse_quantity(&v, d.quantity)))
                    })
                />
            </td>
            <td class="table__cell table__cell--number">
                <Input
                    input_type="number"
                    min="0"
                    value=text_field(|d| d.min_quantity.to_string())
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.min_quantity = parse_quantity(&v, d.min_quantity)))
                    })
                />
            </td>
            <td class="table__cell">
                <Input
                    value=text_field(|d| d.package.clone())
                    on_input=Callback::new(move |v: String| edit(Box::new(move |d| d.package = v)))
                />
            </td>
            <td class="table__cell">
                <Input
                    input_type="date"
                    value=text_field(|d| date_input_value(d.expiry_date))
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.expiry_date = parse_date_input(&v)))
                    })
                />
            </td>
            <td class="table__cell">
                <Input
                    value=text_field(|d| d.storage_class.clone())
                    on_input=Callback::new(move |v: String| edit(Box::new(move |d| d.storage_class = v)))
                />
            </td>
        }
        .into_any()
    };

    let display_cells = move || {
        let m = medicine.get_value();
        let name = m.name.clone();
        view! {
            <td class="table__cell" style=indent(depth)>
                {move || highlight_matches(&name, &search.get())}
            </td>
            <td class="table__cell table__cell--number">{m.quantity}</td>
            <td class="table__cell table__cell--number">{m.min_quantity}</td>
            <td class="table__cell">{m.package.clone()}</td>
            <td class="table__cell" class:table__cell--warning=expiring>
                {dates::display_expiry(&m.expiry_date)}
            </td>
            <td class="table__cell">{m.storage_class.clone().unwrap_or_default()}</td>
        }
        .into_any()
    };

    let actions = move || {
        if !can_edit {
            return ().into_any();
        }
        if is_editing.get() {
            if in_bulk.get() {
                return ().into_any();
            }
            return view! {
                <button class="button button--icon" title="Zapisz" on:click=move |_| on_action.run(RowAction::Save(id))>
                    {icon(ROW_SAVE)}
                </button>
                <button class="button button--icon" title="Anuluj" on:click=move |_| on_action.run(RowAction::Cancel(id))>
                    {icon(ROW_CANCEL)}
                </button>
            }
            .into_any();
        }
        view! {
            <button class="button button--icon" title="Edytuj" on:click=move |_| on_action.run(RowAction::Edit(id))>
                {icon(ROW_EDIT)}
            </button>
            <button class="button button--icon" title="Utylizuj"
                on:click=move |_| on_action.run(RowAction::Utilize(medicine.get_value()))
            >
                {icon(ROW_UTILIZE)}
            </button>
            <button class="button button--icon" title="Dodaj do zamówienia"
                on:click=move |_| on_action.run(RowAction::Attach(medicine.get_value()))
            >
                {icon(ROW_ATTACH)}
            </button>
            <button class="button button--icon button--danger" title="Usuń" on:click=move |_| on_action.run(RowAction::Delete(id))>
                {icon(ROW_DELETE)}
            </button>
        }
        .into_any()
    };

    let (stock_status, term_status, modified_by) = medicine.with_value(|m| {
        (
            m.stock_status.clone(),
            m.term_status.clone(),
            m.modified_by.clone().unwrap_or_default(),
        )
    });

    view! {
        <tr
            class="table__row"
            class:table__row--editing=move || is_editing.get()
            class:table__row--dirty=move || is_dirty.get()
        >
            {move || if is_editing.get() { edit_cells() } else { display_cells() }}
            <td class="table__cell">
                <StatusBadge tone=stock_tone(&stock_status) label=stock_status.clone() />
            </td>
            <td class="table__cell">
                <StatusBadge tone=term_tone(&term_status) label=term_status.clone() />
            </td>
            <td class="table__cell table__cell--muted">{modified_by}</td>
            <td class="table__cell table__cell--actions">{actions}</td>
        </tr>
    }
}
