//! HTTP handlers for the Irrigation Decision Engine

mod crop;
mod decision;
mod health;
mod reading;

pub use crop::*;
pub use decision::*;
pub use health::*;
pub use reading::*;
