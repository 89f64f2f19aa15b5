use super::ui::Select;
use contracts::domain::common::{parse_select_value, CategoryCatalog, CategoryRecord, CategorySelection};
use leptos::prelude::*;

fn to_options(records: Vec<&CategoryRecord>) -> Vec<(String, String)> {
    records
        .into_iter()
        .map(|r| (r.id.to_string(), r.name.clone()))
        .collect()
}

fn selected_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Cascading category / subcategory / sub-subcategory selectors.
///
/// Each change is reported as a whole new selection with the lower levels
/// already reset.
#[component]
pub fn CategorySelect(
    #[prop(into)]
    catalog: Signal<CategoryCatalog>,
    #[prop(into)]
    selection: Signal<CategorySelection>,
    on_change: Callback<CategorySelection>,
    /// 3 for medicines, 2 for equipment
    #[prop(default = 3)]
    levels: usize,
    /// Render labels above the selectors (forms) or not (table cells)
    #[prop(optional)]
    with_labels: bool,
) -> impl IntoView {
    let label = move |text: &str| with_labels.then(|| text.to_string());

    let category_options =
        Signal::derive(move || catalog.with(|c| to_options(c.roots())));
    let subcategory_options = Signal::derive(move || {
        let sel = selection.get();
        catalog.with(|c| to_options(c.subcategory_options(&sel)))
    });
    let sub_subcategory_options = Signal::derive(move || {
        let sel = selection.get();
        catalog.with(|c| to_options(c.sub_subcategory_options(&sel)))
    });

    let update = move |change: &dyn Fn(&mut CategorySelection)| {
        let mut sel = selection.get_untracked();
        change(&mut sel);
        on_change.run(sel);
    };

    view! {
        <div class="category-select">
            <Select
                label=label("Kategoria")
                value=Signal::derive(move || selected_value(selection.get().category))
                options=category_options
                placeholder="— kategoria —"
                on_change=Callback::new(move |v: String| {
                    update(&|s: &mut CategorySelection| s.set_category(parse_select_value(&v)))
                })
            />
            <Select
                label=label("Podkategoria")
                value=Signal::derive(move || selected_value(selection.get().subcategory))
                options=subcategory_options
                placeholder="— podkategoria —"
                disabled=Signal::derive(move || selection.get().category.is_none())
                on_change=Callback::new(move |v: String| {
                    update(&|s: &mut CategorySelection| s.set_subcategory(parse_select_value(&v)))
                })
            />
            {(levels > 2).then(|| view! {
                <Select
                    label=label("Podpodkategoria")
                    value=Signal::derive(move || selected_value(selection.get().sub_subcategory))
                    options=sub_subcategory_options
                    placeholder="— podpodkategoria —"
                    disabled=Signal::derive(move || selection.get().subcategory.is_none())
                    on_change=Callback::new(move |v: String| {
                        update(&|s: &mut CategorySelection| s.set_sub_subcategory(parse_select_value(&v)))
                    })
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_selection() {
        let catalog = CategoryCatalog::new(vec![
            CategoryRecord { id: 1, name: "Leki przeciwbólowe".into(), parent_id: None },
            CategoryRecord { id: 10, name: "Doustne".into(), parent_id: Some(1) },
            CategoryRecord { id: 2, name: "Opatrunki".into(), parent_id: None },
        ]);
        let mut sel = CategorySelection::new(Some(1), None, None);
        assert_eq!(
            to_options(catalog.subcategory_options(&sel)),
            vec![("10".to_string(), "Doustne".to_string())]
        );
        sel.set_category(Some(2));
        assert!(to_options(catalog.subcategory_options(&sel)).is_empty());
        assert_eq!(selected_value(sel.category), "2");
        assert_eq!(selected_value(sel.subcategory), "");
    }
}
