pub mod assistant;
pub mod estimate;
pub mod mortgage;

pub use estimate::{estimate, Estimate, EstimateInput};
pub use mortgage::{calculate_roi, default_plan};
