use super::storage;
use crate::shared::config::config;
use contracts::system::session::Session;
use leptos::prelude::*;

/// Read the stored session once and expose it to the component tree
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let user_blob = storage::get_user_blob();
    let session = Session::from_storage(storage::get_username(), user_blob.as_deref());
    log::info!(
        "session: {} ({})",
        session.display_name(),
        session.position.as_deref().unwrap_or("brak stanowiska")
    );

    provide_context(session);
    children()
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}

/// Whether the current operator may edit inventory
pub fn use_can_edit() -> bool {
    use_session().can_edit(&config().permissions.editor_positions)
}

/// Name stamped into `zmodyfikowal` on writes
pub fn use_author() -> Option<String> {
    use_session().username
}
