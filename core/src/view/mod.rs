use crate::*;
pub use label::*;
pub use snapshot::*;

mod label;
mod snapshot;
