use thiserror::Error;
use vitae_template_core::TemplateError;

#[derive(Error, Debug)]
pub enum JsonTemplateError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Field path error: {0}")]
    JPath(#[from] vitae_jpath::JPathError),

    #[error("Template compilation error: {0}")]
    Compilation(String),

    #[error("Formatter error: {0}")]
    Format(String),
}

impl From<JsonTemplateError> for TemplateError {
    fn from(err: JsonTemplateError) -> Self {
        match err {
            JsonTemplateError::JsonParse(e) => TemplateError::ParseError(e.to_string()),
            JsonTemplateError::JPath(e) => TemplateError::PathError(e),
            JsonTemplateError::Compilation(s) => TemplateError::ConfigError(s),
            JsonTemplateError::Format(s) => TemplateError::ConfigError(s),
        }
    }
}
