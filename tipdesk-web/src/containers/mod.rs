pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod page_content;

pub use layout::Layout;
