use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid filter tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: &'static str },
}

impl Error {
    pub fn invalid_tag(tag: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidTag {
            tag: tag.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag_message() {
        let err = Error::invalid_tag("age", "missing operator");
        assert_eq!(err.to_string(), "invalid filter tag \"age\": missing operator");
    }
}
