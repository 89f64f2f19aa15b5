pub mod model;
pub mod row;
pub mod state;

use crate::domain::a001_medicine::ui::details::NewMedicineModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Select;
use crate::shared::components::{NoticeBar, Notice, PageHeader};
use crate::shared::config::config;
use crate::shared::date_utils::{file_stamp, today};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{distinct_values, SearchInput};
use crate::shared::pdf_report::{download_report, medicine_status_report, report_filename};
use crate::shared::state::InventoryEditor;
use crate::system::session::{use_author, use_can_edit};
use crate::usecases::u501_attach_to_order::{AttachTarget, AttachToOrderModal};
use crate::usecases::u502_utilize_medicine::UtilizeMedicineModal;
use contracts::domain::a001_medicine::Medicine;
use contracts::domain::common::DisplayRow;
use leptos::prelude::*;
use row::{MedicineRow, RowAction, COLUMN_COUNT};
use state::{create_state, matches};
use thaw::{Button, ButtonAppearance};

const TAB_KEY: &str = "a001_medicine";

#[derive(Clone, Debug, PartialEq)]
enum MedicineModal {
    Add,
    Utilize(Medicine),
    Attach(Medicine),
}

#[component]
pub fn MedicineList() -> impl IntoView {
    let editor = InventoryEditor::<Medicine>::new();
    let state = create_state();
    let modal = RwSignal::new(None::<MedicineModal>);
    let can_edit = use_can_edit();
    let author = StoredValue::new(use_author());

    let fetch = move || editor.load(model::fetch_tree());
    fetch();
    editor.load_catalog(model::fetch_categories());

    if let Some(ctx) = use_context::<AppGlobalContext>() {
        Effect::new(move |_| ctx.set_dirty(TAB_KEY, editor.has_unsaved()));
    }

    let visible = Memo::new(move |_| {
        let query = state.with(|s| s.query());
        editor.tree.with(|t| t.filtered(|m| matches(&query, m)))
    });

    let status_options = Signal::derive(move || {
        editor.tree.with(|t| {
            distinct_values(t.items().into_iter().map(|m| m.stock_status.as_str()))
                .into_iter()
                .map(|s| (s.clone(), s))
                .collect::<Vec<_>>()
        })
    });

    let on_action = Callback::new(move |action: RowAction| match action {
        RowAction::Edit(id) => editor.start_row(id),
        RowAction::Cancel(id) => editor.cancel_row(id),
        RowAction::Save(id) => editor.save_row(id, author.get_value(), model::update, fetch),
        RowAction::Delete(id) => editor.delete(id, model::delete, fetch),
        RowAction::Utilize(m) => modal.set(Some(MedicineModal::Utilize(m))),
        RowAction::Attach(m) => modal.set(Some(MedicineModal::Attach(m))),
    });

    let save_all = move |_| editor.save_bulk(author.get_value(), model::update, fetch);
    let toggle_bulk = move |_| {
        if editor.bulk.with_untracked(|b| b.is_active()) {
            editor.exit_bulk();
        } else {
            editor.enter_bulk();
        }
    };

    let export_csv = move |_| {
        let tree = visible.get_untracked();
        let items = tree.items();
        let filename = format!("leki-{}.csv", file_stamp(today()));
        if let Err(e) = export_to_csv(&items, &filename) {
            editor.notice.set(Some(Notice::error(e)));
        }
    };

    let export_pdf = move |_| {
        let date = today();
        let report = visible.with_untracked(|t| medicine_status_report(t, date, &config().report));
        if let Err(e) = download_report(&report, &report_filename("stan-lekow", date)) {
            log::error!("medicine report failed: {}", e);
            editor.notice.set(Some(Notice::error(e.to_string())));
        }
    };

    let close_modal = Callback::new(move |_| modal.set(None));
    let modal_done = Callback::new(move |_| {
        modal.set(None);
        fetch();
    });

    let subtitle = Signal::derive(move || {
        let shown = visible.with(|t| t.item_count());
        let total = editor.tree.with(|t| t.item_count());
        if shown == total {
            format!("Pozycji: {}", total)
        } else {
            format!("Pozycji: {} z {}", shown, total)
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Leki" subtitle=subtitle>
                <Show when=move || can_edit>
                    <Show
                        when=move || editor.is_bulk()
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(MedicineModal::Add))>
                                {icon("plus")} "Dodaj lek"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=toggle_bulk>
                                {icon("edit")} "Edytuj wszystko"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || editor.saving.get())
                            on_click=save_all
                        >
                            {icon("save")}
                            {move || if editor.saving.get() { "Zapisywanie..." } else { "Zapisz wszystko" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=toggle_bulk>
                            {icon("x")} "Zakończ edycję"
                        </Button>
                    </Show>
                </Show>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")} "Odśwież"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export_csv>
                    {icon("download")} "CSV"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export_pdf>
                    {icon("pdf")} "Raport PDF"
                </Button>
            </PageHeader>

            <NoticeBar notice=editor.notice />

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                    placeholder="Szukaj leku..."
                />
                <Select
                    value=Signal::derive(move || state.with(|s| s.status.clone()))
                    options=status_options
                    placeholder="Wszystkie statusy".to_string()
                    on_change=Callback::new(move |v: String| state.update(|s| s.status = v))
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nazwa"</th>
                            <th class="table__header-cell">"Ilość"</th>
                            <th class="table__header-cell">"Min."</th>
                            <th class="table__header-cell">"Opakowanie"</th>
                            <th class="table__header-cell">"Data ważności"</th>
                            <th class="table__header-cell">"Klasa przech."</th>
                            <th class="table__header-cell">"Status ilości"</th>
                            <th class="table__header-cell">"Status terminu"</th>
                            <th class="table__header-cell">"Zmodyfikował"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get().display_rows();
                            if rows.is_empty() {
                                let text = state.with(|s| s.empty_text(editor.loading.get()));
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
                                DisplayRow::Item { depth, item } => view! {
                                    <MedicineRow
                                        medicine=item
                                        depth=depth
                                        editor=editor
                                        search=Signal::derive(move || state.with(|s| s.search.clone()))
                                        can_edit=can_edit
                                        on_action=on_action
                                    />
                                }.into_any(),
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            {move || modal.get().map(|m| match m {
                MedicineModal::Add => view! {
                    <NewMedicineModal catalog=editor.catalog on_close=close_modal on_saved=modal_done />
                }.into_any(),
                MedicineModal::Utilize(medicine) => view! {
                    <UtilizeMedicineModal medicine=medicine on_close=close_modal on_done=modal_done />
                }.into_any(),
                MedicineModal::Attach(medicine) => view! {
                    <AttachToOrderModal
                        target=AttachTarget::Medicine { id: medicine.id, name: medicine.name.clone() }
                        on_close=close_modal
                        on_done=modal_done
                    />
                }.into_any(),
            })}
        </div>
    }
}
