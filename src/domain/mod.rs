pub mod agent;
pub mod content;
pub mod format;
pub mod project;
pub mod property;

pub use agent::{Agency, Agent};
pub use content::{Area, Blog, Job, Transaction};
pub use project::{Developer, Project};
pub use property::{PriceType, Property, PropertyStatus, PropertyType};
