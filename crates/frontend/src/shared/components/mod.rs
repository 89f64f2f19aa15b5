pub mod category_select;
pub mod notice;
pub mod page_header;
pub mod ui;

pub use category_select::CategorySelect;
pub use notice::{confirm, Notice, NoticeBar, NoticeKind};
pub use page_header::PageHeader;
