use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::shared::constants::BLOG_FILE_EXTENSION;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBlogRequest {
    pub filename: String,
    pub file_content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveBlogResponse {
    pub success: bool,
    pub path: String,
}

/// Appends `filename` and the `.md` suffix to `directory`, then normalizes the result
/// lexically.
///
/// A leading root in `filename` does not replace `directory`: `/a/b` lands at
/// `<directory>/a/b.md`. `..` segments are resolved lexically and may climb above
/// `directory`.
pub fn blog_path(directory: &Path, filename: &str) -> PathBuf {
    let file = format!("{}.{}", filename, BLOG_FILE_EXTENSION);
    let mut path = PathBuf::new();

    for component in directory.components() {
        push_component(&mut path, component);
    }
    for component in Path::new(&file).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => push_component(&mut path, other),
        }
    }

    path
}

fn push_component(path: &mut PathBuf, component: Component) {
    match component {
        Component::CurDir => {}
        Component::ParentDir => {
            path.pop();
        }
        other => path.push(other.as_os_str()),
    }
}

/// Writes `file_content` to `<directory>/<filename>.md`, creating `directory` if needed.
///
/// An existing file is truncated and replaced. Concurrent saves to the same filename
/// are not serialized.
pub async fn save_blog(
    directory: &Path,
    filename: &str,
    file_content: &str,
) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(directory)
        .await
        .with_context(|| format!("Failed to create blog directory {}", directory.display()))?;

    let path = blog_path(directory, filename);
    tokio::fs::write(&path, file_content.as_bytes())
        .await
        .with_context(|| format!("Failed to write blog file {}", path.display()))?;

    Ok(path)
}
