//! Top bar: sidebar toggle, vessel name and the signed-in operator.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::session::{use_can_edit, use_session};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let can_edit = use_can_edit();

    let is_sidebar_visible = move || ctx.left_open.get();
    let position = session
        .position
        .clone()
        .unwrap_or_else(|| "brak stanowiska".to_string());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ukryj menu" } else { "Pokaż menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{config().report.vessel_name.clone()}</span>
                <span class="top-header__subtitle">"Apteczka i sprzęt medyczny"</span>
            </div>

            <div class="top-header__actions">
                {(!can_edit).then(|| view! {
                    <span class="top-header__badge">"Tylko podgląd"</span>
                })}
                <div class="top-header__user">
                    {icon("user")}
                    <span>{session.display_name().to_string()}</span>
                    <span class="top-header__position">{position}</span>
                </div>
            </div>
        </div>
    }
}
