pub mod catalog;
pub mod format;
pub mod pagination;
pub mod search;
pub mod selection;
