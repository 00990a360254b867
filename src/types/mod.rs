//! Shared response types.

mod response;

pub use response::{Accepted, Created, Deleted};
