//! Access domain module.
//!
//! Static-token gate used by the `validate` tool.

mod error;
mod gate;

pub use error::AccessError;
pub use gate::AccessGate;
