//! Rendering module for handing documents to downstream consumers.

mod json;
mod outline;

pub use json::{to_json, JsonFormat};
pub use outline::to_outline;
