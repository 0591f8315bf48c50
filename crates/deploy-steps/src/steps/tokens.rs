//! Tokens de entorno de prueba: ERC20 genéricos, WBNB y los tokens de
//! recompensa de los chefs externos. Ninguno corre en mainnet.

use serde_json::json;

use deploy_core::{CoreError, DeployStep, StepContext};

use crate::names;

use super::{operator, skip_on_mainnet};

/// (nombre, display, símbolo) — todos con 18 decimales.
const TOKENS: [(&str, &str, &str); 6] = [(names::BUSD, "Binance USD", "BUSD"),
                                         (names::XMS, "XMS", "XMS"),
                                         (names::BTCB, "BTCB", "BTCB"),
                                         (names::ETH, "ETH", "ETH"),
                                         (names::USDM, "USDm", "USDm"),
                                         (names::USDT, "USDT", "USDT")];

/// Un millón de unidades con 18 decimales.
const INITIAL_MINT: &str = "1000000000000000000000000";

/// Despliega el set de ERC20 genéricos y mintea saldo inicial al operador.
/// Skip por elemento: la tabla puede crecer sin invalidar corridas previas.
pub struct TokensStep;

impl DeployStep for TokensStep {
    fn tag(&self) -> &str {
        "Tokens"
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        for (name, display, symbol) in TOKENS {
            let outcome = ctx.deploy_once(name,
                                          "GenericERC20",
                                          json!([display, symbol, 18]),
                                          self.tag())?;
            if outcome.is_newly_created {
                ctx.chain
                   .execute(outcome.address, "mint", &json!([operator(), INITIAL_MINT]))?;
            }
        }
        Ok(())
    }
}

/// Wrapped-native de prueba, con depósito inicial para fondear liquidez.
pub struct WbnbStep;

impl DeployStep for WbnbStep {
    fn tag(&self) -> &str {
        names::WBNB
    }

    fn creates(&self) -> Vec<String> {
        vec![names::WBNB.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let outcome = ctx.deploy_once(names::WBNB, "WBNB", json!([]), self.tag())?;
        if outcome.is_newly_created {
            // 60 nativos envueltos para las tablas de liquidez
            ctx.chain
               .execute(outcome.address, "deposit", &json!(["60000000000000000000"]))?;
        }
        Ok(())
    }
}

/// Token de recompensa del chef externo principal.
pub struct CakeStep;

impl DeployStep for CakeStep {
    fn tag(&self) -> &str {
        names::CAKE
    }

    fn creates(&self) -> Vec<String> {
        vec![names::CAKE.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let outcome = ctx.deploy_once(names::CAKE, "CakeToken", json!([]), self.tag())?;
        if outcome.is_newly_created {
            ctx.chain
               .execute(outcome.address,
                        "mint",
                        &json!([operator(), "1000000000000000000000000"]))?;
        }
        Ok(())
    }
}

/// Token de recompensa del chef de Biswap.
pub struct BswStep;

impl DeployStep for BswStep {
    fn tag(&self) -> &str {
        names::BSW
    }

    fn creates(&self) -> Vec<String> {
        vec![names::BSW.to_string()]
    }

    fn run(&self, ctx: &mut StepContext) -> Result<(), CoreError> {
        if skip_on_mainnet(ctx.network, self.tag()) {
            return Ok(());
        }
        let outcome = ctx.deploy_once(names::BSW, "BSWToken", json!([]), self.tag())?;
        if outcome.is_newly_created {
            ctx.chain
               .execute(outcome.address, "addMinter", &json!([operator()]))?;
        }
        Ok(())
    }
}
