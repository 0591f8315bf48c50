//! Registro de artifacts sobre archivos JSON.
//!
//! Un archivo por artifact en `<dir>/<red>/<nombre>.json`, con la dirección,
//! la interfaz, el paso creador y metadatos de auditoría. La caché en
//! memoria es la fuente para lecturas; el disco sólo se toca en `save` y al
//! abrir. El orden de creación sobrevive reinicios vía un número de
//! secuencia persistido.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use deploy_core::{ArtifactRegistry, CoreError, DeployedArtifact};
use deploy_domain::ChainAddress;

use crate::config::StoreConfig;
use crate::error::PersistenceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredArtifact {
    name: String,
    address: ChainAddress,
    interface: serde_json::Value,
    created_at_step: String,
    /// Posición de creación dentro del almacén (orden estable al recargar).
    seq: u64,
    saved_at: DateTime<Utc>,
}

impl StoredArtifact {
    fn to_artifact(&self) -> DeployedArtifact {
        DeployedArtifact::new(self.name.clone(),
                              self.address,
                              self.interface.clone(),
                              self.created_at_step.clone())
    }
}

#[derive(Debug)]
pub struct FileRegistry {
    dir: PathBuf,
    cache: IndexMap<String, StoredArtifact>,
}

impl FileRegistry {
    /// Abre (o crea) el almacén de la red configurada y precarga la caché.
    pub fn open(config: &StoreConfig) -> Result<Self, PersistenceError> {
        let dir = config.dir.join(config.network.name());
        Self::open_dir(&dir)
    }

    pub fn open_dir(dir: &Path) -> Result<Self, PersistenceError> {
        fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;

        let mut loaded: Vec<StoredArtifact> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
            let entry = entry.map_err(|e| io_err(dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            let stored: StoredArtifact = serde_json::from_str(&raw).map_err(|e| {
                                             PersistenceError::Corrupt {
                                                 path: path.display().to_string(),
                                                 detail: e.to_string(),
                                             }
                                         })?;
            loaded.push(stored);
        }
        loaded.sort_by_key(|s| s.seq);

        let cache = loaded.into_iter().map(|s| (s.name.clone(), s)).collect();
        Ok(Self { dir: dir.to_path_buf(), cache })
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn write(&self, stored: &StoredArtifact) -> Result<(), PersistenceError> {
        let path = self.path_for(&stored.name);
        let body = serde_json::to_vec_pretty(stored).map_err(|e| PersistenceError::Corrupt {
                                                        path: path.display().to_string(),
                                                        detail: e.to_string(),
                                                    })?;
        fs::write(&path, body).map_err(|e| io_err(&path, e))
    }
}

fn io_err(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io { path: path.display().to_string(), source }
}

impl ArtifactRegistry for FileRegistry {
    fn get_or_null(&self, name: &str) -> Option<DeployedArtifact> {
        self.cache.get(name).map(StoredArtifact::to_artifact)
    }

    fn save(&mut self, artifact: DeployedArtifact) -> Result<(), CoreError> {
        if self.cache.contains_key(&artifact.name) {
            return Err(CoreError::DuplicateArtifactName(artifact.name));
        }
        let stored = StoredArtifact { name: artifact.name.clone(),
                                      address: artifact.address,
                                      interface: artifact.interface,
                                      created_at_step: artifact.created_at_step,
                                      seq: self.cache.len() as u64,
                                      saved_at: Utc::now() };
        self.write(&stored)?;
        log::debug!("persisted artifact \"{}\"", stored.name);
        self.cache.insert(stored.name.clone(), stored);
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        self.cache.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn art(name: &str) -> DeployedArtifact {
        DeployedArtifact::new(name, ChainAddress::derive(name), json!({"contract": name}), "test")
    }

    #[test]
    fn save_then_reopen_preserves_artifacts_and_order() {
        let tmp = TempDir::new().unwrap();
        {
            let mut reg = FileRegistry::open_dir(tmp.path()).unwrap();
            for n in ["Core", "UP", "WBNB"] {
                reg.save(art(n)).unwrap();
            }
        }
        let reg = FileRegistry::open_dir(tmp.path()).unwrap();
        assert_eq!(reg.names(), vec!["Core", "UP", "WBNB"]);
        assert_eq!(reg.get("UP").unwrap().address, ChainAddress::derive("UP"));
    }

    #[test]
    fn duplicate_save_fails_without_touching_disk() {
        let tmp = TempDir::new().unwrap();
        let mut reg = FileRegistry::open_dir(tmp.path()).unwrap();
        reg.save(art("Core")).unwrap();
        let before = fs::read_to_string(tmp.path().join("Core.json")).unwrap();
        let err = reg.save(art("Core")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateArtifactName(_)));
        let after = fs::read_to_string(tmp.path().join("Core.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn non_json_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("README.md"), "notes").unwrap();
        let mut reg = FileRegistry::open_dir(tmp.path()).unwrap();
        assert!(reg.is_empty());
        reg.save(art("Core")).unwrap();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn corrupt_file_is_reported_with_its_path() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Core.json"), "{ not json").unwrap();
        let err = FileRegistry::open_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, PersistenceError::Corrupt { .. }));
    }
}
