use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Tabs /> }.into_any()
            />
        </SessionProvider>
    }
}
