use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog frame used by every form and workflow modal.
///
/// Closes on Escape, on the overlay and on the close button. Parents
/// decide whether the modal is rendered at all.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    /// Buttons rendered in the footer (Save, Cancel, ...)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|buttons| view! {
                    <div class="modal-footer">{buttons.run()}</div>
                })}
            </div>
        </div>
    }
}
