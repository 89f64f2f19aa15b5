pub mod context;
pub mod storage;

pub use context::{use_author, use_can_edit, use_session, SessionProvider};
