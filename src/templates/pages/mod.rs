pub mod about;
pub mod agents;
pub mod careers;
pub mod estimate;
pub mod forms;
pub mod home;
pub mod listings;
pub mod property;
pub mod search;
pub mod transactions;

pub use about::about_page;
pub use agents::agents_page;
pub use careers::careers_page;
pub use estimate::{estimate_page, estimate_result};
pub use forms::{contact_page, login_page, sell_page};
pub use home::home_page;
pub use listings::{areas_page, blog_page, projects_page};
pub use property::property_page;
pub use search::{search_page, SearchVm};
pub use transactions::transactions_page;
