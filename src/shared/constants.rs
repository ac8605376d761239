pub const CONFIG_DIRECTORY: &str = "./config";

pub const DEFAULT_SERVER_BIND_POINT: &str = "0.0.0.0:8080";
pub const DEFAULT_BLOG_DIRECTORY: &str = "static/blogs";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

pub const BLOG_FILE_EXTENSION: &str = "md";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save file to disk";
