//! Trait de paso de despliegue.

use crate::context::StepContext;
use crate::errors::CoreError;

/// Fase de ejecución: los pasos `Final` se difieren hasta que toda la fase
/// normal alcanzó estado terminal, y corren en orden de declaración.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    Final,
}

/// Unidad de orquestación pura: decide argumentos a partir del registro,
/// invoca la cadena y registra resultados. Re-ejecutar un paso cuyos
/// artifacts ya existen debe ser un no-op (replay idempotente).
pub trait DeployStep {
    /// Tag estable y único dentro del pipeline.
    fn tag(&self) -> &str;

    /// Tags de los que depende este paso.
    fn depends_on(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Nombres de artifact que el paso pretende crear. Si la lista no está
    /// vacía y todos existen ya, el scheduler salta el paso genéricamente
    /// sin invocar la acción. Pasos con conjuntos dinámicos (tablas) la
    /// dejan vacía y hacen el skip por elemento dentro de la acción.
    fn creates(&self) -> Vec<String> {
        Vec::new()
    }

    fn phase(&self) -> Phase {
        Phase::Normal
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError>;
}
