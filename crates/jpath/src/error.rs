use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JPathError {
    #[error("Field path parse error in '{0}': {1}")]
    JPathParse(String, String),

    #[error("Field path must not be empty")]
    EmptyPath,
}
