use std::path::{Path, PathBuf};

pub type StoryResult<T> = Result<T, StoryError>;

#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("asset error for '{}': {reason}", path.display())]
    Asset { path: PathBuf, reason: String },

    #[error("render error: {0}")]
    Render(String),
}

impl StoryError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn asset(path: &Path, reason: impl Into<String>) -> Self {
        Self::Asset {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            StoryError::config("x")
                .to_string()
                .contains("invalid configuration:")
        );
        assert!(StoryError::render("x").to_string().contains("render error:"));
    }

    #[test]
    fn asset_error_names_the_path() {
        let err = StoryError::asset(Path::new("assets/stories/story-3.png"), "not found");
        let msg = err.to_string();
        assert!(msg.contains("assets/stories/story-3.png"));
        assert!(msg.contains("not found"));
    }
}
