pub mod model;
pub mod sanitize;
pub mod validate;
