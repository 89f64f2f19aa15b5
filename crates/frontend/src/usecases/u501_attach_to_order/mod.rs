pub mod api;
pub mod model;
pub mod view;

pub use model::AttachTarget;
pub use view::AttachToOrderModal;
