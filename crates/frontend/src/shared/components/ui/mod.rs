pub mod badge;
pub mod input;
pub mod select;

pub use badge::StatusBadge;
pub use input::Input;
pub use select::Select;
