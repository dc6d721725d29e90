pub mod capture_provider;
pub mod source;
pub mod window_inspector;
