//! Wire types shared by every inventory view.
//!
//! The backend owns the data; everything here mirrors its JSON shapes and
//! adds the small amount of client-side shaping the views need.

pub mod domain;
pub mod shared;
pub mod system;
