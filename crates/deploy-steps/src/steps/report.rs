//! Reporte final de direcciones.

use deploy_core::{CoreError, DeployStep, Phase, StepContext};

/// Imprime la tabla nombre → dirección al final de la corrida. Fase final:
/// corre después de que toda la fase normal terminó con éxito.
pub struct PrintAddressesStep;

impl DeployStep for PrintAddressesStep {
    fn tag(&self) -> &str {
        "PrintAddresses"
    }

    fn phase(&self) -> Phase {
        Phase::Final
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        for name in ctx.registry.names() {
            let artifact = ctx.registry.get(&name)?;
            log::info!("{:<48} {}", name, artifact.address);
        }
        Ok(())
    }
}
