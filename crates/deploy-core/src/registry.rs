//! Registro de artifacts: create-once, sin update ni delete.
//!
//! La interfaz no expone mutación más allá de `save`, y `save` falla ante un
//! nombre repetido: la invariante de escritura única queda garantizada por
//! el tipo, no por convención. Las implementaciones preservan el orden de
//! inserción para que los reportes sean reproducibles.

use indexmap::IndexMap;

use deploy_domain::ChainAddress;

use crate::errors::CoreError;
use crate::model::DeployedArtifact;

pub trait ArtifactRegistry {
    /// Búsqueda tolerante: `None` si el nombre no existe.
    fn get_or_null(&self, name: &str) -> Option<DeployedArtifact>;

    /// Alta única. Falla con `DuplicateArtifactName` si el nombre ya existe.
    fn save(&mut self, artifact: DeployedArtifact) -> Result<(), CoreError>;

    /// Nombres registrados, en orden de creación.
    fn names(&self) -> Vec<String>;

    fn exists(&self, name: &str) -> bool {
        self.get_or_null(name).is_some()
    }

    /// Búsqueda estricta: la ausencia es un error fatal de ordenamiento.
    fn get(&self, name: &str) -> Result<DeployedArtifact, CoreError> {
        self.get_or_null(name)
            .ok_or_else(|| CoreError::MissingDependencyArtifact(name.to_string()))
    }

    fn address_of(&self, name: &str) -> Result<ChainAddress, CoreError> {
        Ok(self.get(name)?.address)
    }
}

/// Registro en memoria (tests y corridas efímeras).
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    inner: IndexMap<String, DeployedArtifact>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ArtifactRegistry for InMemoryRegistry {
    fn get_or_null(&self, name: &str) -> Option<DeployedArtifact> {
        self.inner.get(name).cloned()
    }

    fn save(&mut self, artifact: DeployedArtifact) -> Result<(), CoreError> {
        if self.inner.contains_key(&artifact.name) {
            return Err(CoreError::DuplicateArtifactName(artifact.name.clone()));
        }
        self.inner.insert(artifact.name.clone(), artifact);
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        self.inner.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn art(name: &str) -> DeployedArtifact {
        DeployedArtifact::new(name, ChainAddress::derive(name), json!({"contract": name}), "test")
    }

    #[test]
    fn save_then_get() {
        let mut reg = InMemoryRegistry::new();
        reg.save(art("Core")).unwrap();
        assert!(reg.exists("Core"));
        assert_eq!(reg.get("Core").unwrap().address, ChainAddress::derive("Core"));
        assert_eq!(reg.get_or_null("UP"), None);
    }

    #[test]
    fn duplicate_save_fails() {
        let mut reg = InMemoryRegistry::new();
        reg.save(art("Core")).unwrap();
        let err = reg.save(art("Core")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateArtifactName("Core".into()));
    }

    #[test]
    fn missing_get_is_fatal() {
        let reg = InMemoryRegistry::new();
        let err = reg.get("UpFarm").unwrap_err();
        assert_eq!(err, CoreError::MissingDependencyArtifact("UpFarm".into()));
    }

    #[test]
    fn names_preserve_insertion_order() {
        let mut reg = InMemoryRegistry::new();
        for n in ["Core", "UP", "WBNB"] {
            reg.save(art(n)).unwrap();
        }
        assert_eq!(reg.names(), vec!["Core", "UP", "WBNB"]);
    }
}
