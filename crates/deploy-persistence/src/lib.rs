//! deploy-persistence
//!
//! Registro de artifacts respaldado por archivos JSON, un archivo por
//! artifact bajo `<dir>/<red>/<nombre>.json`. El layout es legible por
//! humanos y diff-able: el estado persistido ES el contrato de
//! reanudación de una corrida.
//!
//! Módulos:
//! - `file`: implementación `FileRegistry` del `ArtifactRegistry` del core.
//! - `config`: carga de configuración desde .env.
//! - `error`: mapeo de errores de IO/serialización.

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, StoreConfig};
pub use error::PersistenceError;
pub use file::FileRegistry;
