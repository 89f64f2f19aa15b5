use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::components::confirm;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key.get_value().as_str()));
    // `For` keeps this component alive across flag changes, so read it live
    let is_dirty = move || {
        tabs_store
            .opened
            .with(|tabs| tabs.iter().any(|t| t.key == key.get_value() && t.dirty))
    };

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if is_dirty() && !confirm("Zakładka ma niezapisane zmiany. Zamknąć i je odrzucić?") {
            return;
        }
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            {move || if is_dirty() { " *" } else { "" }}
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}
