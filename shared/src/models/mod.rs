//! Domain models for the Irrigation Decision Engine

mod crop;
mod decision;
mod reading;

pub use crop::*;
pub use decision::*;
pub use reading::*;
