//! Business logic services for the Irrigation Decision Engine

pub mod crop;
pub mod decision;
pub mod reading;

pub use crop::CropService;
pub use decision::DecisionService;
pub use reading::ReadingService;
