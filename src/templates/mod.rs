pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_page, notice};
pub use layouts::desktop::desktop_layout;
