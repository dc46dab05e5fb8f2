pub mod generate;

pub use generate::{GeneratePoemParams, GeneratePoemTool};
