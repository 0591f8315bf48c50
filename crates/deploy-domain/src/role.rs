//! Identificadores de rol del contrato de acceso central.
//!
//! Cada rol se identifica por el hash de su nombre; el contrato de acceso
//! sólo compara identidades, así que basta con que la derivación sea
//! estable dentro del pipeline.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identificador de rol (32 bytes, hash del nombre del rol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub [u8; 32]);

impl RoleId {
    pub fn of(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Self(out)
    }

    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(66);
        s.push_str("0x");
        for b in self.0.iter() {
            s.push_str(&format!("{:02x}", b));
        }
        s
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Rol maestro: lo reciben farm y staking para acuñar recompensas.
pub static MASTER_ROLE: Lazy<RoleId> = Lazy::new(|| RoleId::of("MASTER_ROLE"));

/// Rol de gobierno: lo recibe el timelock tras su despliegue.
pub static GOVERNOR_ROLE: Lazy<RoleId> = Lazy::new(|| RoleId::of("GOVERNOR_ROLE"));
