pub mod view;

pub use view::OrderDetailsView;
