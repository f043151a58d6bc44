pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod pagination;
pub(crate) mod theme_switcher;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use loading::Loading;
pub use pagination::{PageState, Pagination};
