use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub server_bind_point: String,
    pub blog_directory: String,
    pub log_level: String,
}
