pub mod validate;

pub use validate::{ValidateParams, ValidateTool};
