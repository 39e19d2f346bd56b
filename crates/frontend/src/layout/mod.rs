pub mod footer;
pub mod global_context;
pub mod navbar;
pub mod toast_service;
