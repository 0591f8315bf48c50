//! Carga de configuración del almacén desde variables de entorno.
//! Usa convención `DEPLOYMENTS_DIR` y `NETWORK`, con defaults razonables
//! para desarrollo local.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use deploy_domain::Network;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub network: Network,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let dir = env::var("DEPLOYMENTS_DIR").unwrap_or_else(|_| "deployments".to_string());
        let network = env::var("NETWORK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Network::Local);
        Self { dir: PathBuf::from(dir), network }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
