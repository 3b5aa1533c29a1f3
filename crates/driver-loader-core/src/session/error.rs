use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session operation '{0}' is not implemented by this driver")]
    NotImplemented(&'static str),

    #[error("Statement failed on schema '{schema}': {message}", schema = .schema.as_deref().unwrap_or("<current>"))]
    Execution { schema: Option<String>, message: String },
}
