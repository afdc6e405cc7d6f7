//! Request body keys shared across validators.

pub const ID: &str = "id";
pub const FIELD: &str = "field";
pub const VALUE: &str = "value";
