pub mod configuration;
pub mod constants;
pub mod save_blog;
