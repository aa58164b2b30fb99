pub mod content;
pub mod page;
