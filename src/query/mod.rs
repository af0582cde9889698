mod agent;
mod engine;
mod listings;
mod property;
mod views;

pub use agent::{AgentCriteria, AgentSort};
pub use engine::{run, Criteria, TextQuery};
pub use listings::{
    AreaCriteria, BlogCriteria, JobCriteria, ProjectCriteria, TransactionCriteria, ALL_LABEL,
};
pub use property::{BedroomsFilter, PropertyCriteria, PropertySort, Purpose};
pub use views::{featured, similar_properties, TransactionStats};
