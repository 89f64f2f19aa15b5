pub mod dates;
pub mod error_body;
pub mod lenient;

pub use error_body::ErrorBody;
