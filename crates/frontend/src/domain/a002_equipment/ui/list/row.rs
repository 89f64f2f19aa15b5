use crate::shared::components::ui::{Input, StatusBadge};
use crate::shared::components::CategorySelect;
use crate::shared::config::config;
use crate::shared::date_utils::{date_input_value, expires_within, parse_date_input, today};
use crate::shared::form_utils::parse_quantity;
use crate::shared::icons::{icon, ROW_ATTACH, ROW_CANCEL, ROW_DELETE, ROW_EDIT, ROW_SAVE};
use crate::shared::list_utils::highlight_matches;
use crate::shared::state::InventoryEditor;
use contracts::domain::a002_equipment::{Equipment, EquipmentDraft};
use contracts::domain::common::{term_tone, CategorySelection};
use contracts::shared::dates;
use leptos::prelude::*;

pub const COLUMN_COUNT: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    Edit(i64),
    Save(i64),
    Cancel(i64),
    Delete(i64),
    Attach(Equipment),
}

#[component]
pub fn EquipmentRow(
    equipment: Equipment,
    depth: usize,
    editor: InventoryEditor<Equipment>,
    #[prop(into)]
    search: Signal<String>,
    can_edit: bool,
    on_action: Callback<RowAction>,
) -> impl IntoView {
    let id = equipment.id;
    let is_editing = Memo::new(move |_| editor.is_editing(id));
    let is_dirty = Memo::new(move |_| editor.is_dirty(id));
    let in_bulk = Memo::new(move |_| editor.is_bulk());
    let draft = Signal::derive(move || editor.draft(id).unwrap_or_default());
    let expiring = expires_within(
        equipment.expiry(),
        today(),
        config().inventory.expiry_warning_days,
    );
    let shortage = equipment.shortage();
    let equipment = StoredValue::new(equipment);
    let padding = format!("padding-left: {}px;", 8 + depth * 16);

    let field = move |get: fn(&EquipmentDraft) -> String| Signal::derive(move || get(&draft.get()));
    let edit = move |change: Box<dyn FnOnce(&mut EquipmentDraft)>| editor.edit(id, change);

    let name_cell_style = padding.clone();
    let edit_cells = move || {
        view! {
            <td class="table__cell" style=name_cell_style.clone()>
                <Input
                    value=field(|d| d.name.clone())
                    on_input=Callback::new(move |v: String| edit(Box::new(move |d| d.name = v)))
                />
                <CategorySelect
                    catalog=editor.catalog
                    selection=Signal::derive(move || draft.get().categories)
                    on_change=Callback::new(move |sel: CategorySelection| {
                        edit(Box::new(move |d| d.categories = sel))
                    })
                    levels=2
                />
            </td>
            <td class="table__cell table__cell--number">
                <Input
                    input_type="number"
                    min="0"
                    value=field(|d| d.current_quantity.to_string())
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.current_quantity = parse_quantity(&v, d.current_quantity)))
                    })
                />
            </td>
            <td class="table__cell table__cell--number">
                <Input
                    input_type="number"
                    min="0"
                    value=field(|d| d.required_quantity.to_string())
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.required_quantity = parse_quantity(&v, d.required_quantity)))
                    })
                />
            </td>
            <td class="table__cell table__cell--number">
                {move || draft.with(|d| (d.required_quantity - d.current_quantity).max(0))}
            </td>
            <td class="table__cell">
                <Input
                    input_type="date"
                    value=field(|d| date_input_value(d.expiry_date))
                    on_input=Callback::new(move |v: String| {
                        edit(Box::new(move |d| d.expiry_date = parse_date_input(&v)))
                    })
                />
            </td>
        }
        .into_any()
    };

    let display_cells = move || {
        let e = equipment.get_value();
        let name = e.name.clone();
        view! {
            <td class="table__cell" style=padding.clone()>
                {move || highlight_matches(&name, &search.get())}
            </td>
            <td class="table__cell table__cell--number">{e.current_quantity}</td>
            <td class="table__cell table__cell--number">{e.required_quantity}</td>
            <td class="table__cell table__cell--number" class:table__cell--warning={shortage > 0}>
                {(shortage > 0).then(|| shortage)}
            </td>
            <td class="table__cell" class:table__cell--warning=expiring>
                {dates::display_expiry(&e.expiry_date)}
            </td>
        }
        .into_any()
    };

    let actions = move || {
        if !can_edit || (is_editing.get() && in_bulk.get()) {
            return ().into_any();
        }
        if is_editing.get() {
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
            <button class="button button--icon" title="Dodaj do zamówienia"
                on:click=move |_| on_action.run(RowAction::Attach(equipment.get_value()))
            >
                {icon(ROW_ATTACH)}
            </button>
            <button class="button button--icon button--danger" title="Usuń" on:click=move |_| on_action.run(RowAction::Delete(id))>
                {icon(ROW_DELETE)}
            </button>
        }
        .into_any()
    };

    let (term_status, modified_by) = equipment.with_value(|e| {
        (e.term_status.clone(), e.modified_by.clone().unwrap_or_default())
    });

    view! {
        <tr
            class="table__row"
            class:table__row--editing=move || is_editing.get()
            class:table__row--dirty=move || is_dirty.get()
        >
            {move || if is_editing.get() { edit_cells() } else { display_cells() }}
            <td class="table__cell">
                <StatusBadge tone=term_tone(&term_status) label=term_status.clone() />
            </td>
            <td class="table__cell table__cell--muted">{modified_by}</td>
            <td class="table__cell table__cell--actions">{actions}</td>
        </tr>
    }
}
