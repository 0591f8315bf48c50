//! Errores de persistencia.
//! Mapea errores de IO y serialización a variantes semánticas, y de ahí al
//! error de storage del core.

use thiserror::Error;

use deploy_core::CoreError;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt artifact file {path}: {detail}")]
    Corrupt { path: String, detail: String },
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        CoreError::Storage(err.to_string())
    }
}
