use std::path::PathBuf;
use std::sync::Arc;

/// Shared by every handler. `blog_directory` is always absolute.
#[derive(Clone, Debug)]
pub struct AppState {
    pub blog_directory: Arc<PathBuf>,
}

impl AppState {
    pub fn new<P: Into<PathBuf>>(blog_directory: P) -> Self {
        AppState {
            blog_directory: Arc::new(blog_directory.into()),
        }
    }
}
