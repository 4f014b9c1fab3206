pub mod lifecycle;
pub mod schema;
pub mod validation;
