//! Descriptores declarativos de estrategias.
//!
//! Una fila de la tabla de estrategias describe *qué* quiere la estrategia
//! (want, earned, fuente de yield, modo) y opcionalmente *cómo* rutear los
//! swaps. Todo lo que la fila no dice lo completa el resolver con defaults
//! nombrados; la fila nunca contiene direcciones, sólo nombres simbólicos
//! de artifacts.

use serde::Serialize;

/// Variante de contrato de estrategia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum StrategyKind {
    /// Estrategia sobre el AMM externo (chef de terceros).
    #[default]
    Pcs,
    /// Estrategia sobre el AMM propio del protocolo.
    Mars,
}

impl StrategyKind {
    /// Nombre del contrato a desplegar para esta variante.
    pub fn contract_name(&self) -> &'static str {
        match self {
            StrategyKind::Pcs => "StrategyPCS",
            StrategyKind::Mars => "StrategyMars",
        }
    }
}

/// Modo de operación de la estrategia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum StrategyMode {
    /// Cosecha y recompone el want (hace swaps).
    #[default]
    Accumulate,
    /// Sólo cosecha y distribuye; jamás swapea.
    CollectOnly,
}

/// Pista de ruteo para una conversión earned→objetivo.
///
/// Cada conversión admite hasta dos tramos consecutivos (`path0` en
/// `router0`, después `path1` en `router1`) para cruzar dos AMMs distintos.
/// Los hops son nombres simbólicos que el resolver traduce a direcciones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegSpec {
    pub path0: Option<&'static [&'static str]>,
    pub router0: Option<&'static str>,
    pub path1: Option<&'static [&'static str]>,
    pub router1: Option<&'static str>,
}

impl LegSpec {
    pub fn is_empty(&self) -> bool {
        self.path0.is_none() && self.path1.is_none()
    }
}

/// Overrides de comisiones; `None` usa el default del protocolo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeOverrides {
    pub controller_fee: Option<u64>,
    pub buy_back_rate: Option<u64>,
    pub entrance_fee_factor: Option<u64>,
    pub withdraw_fee_factor: Option<u64>,
}

/// Fila de la tabla de estrategias.
#[derive(Debug, Clone, Default)]
pub struct StrategyDescriptor {
    /// Nombre simbólico del asset want (token o par LP).
    pub want: &'static str,
    /// Tokens constituyentes declarados cuando want es un par. El orden
    /// declarado puede no coincidir con el orden canónico del par.
    pub tokens: Option<[&'static str; 2]>,
    /// Token cosechado.
    pub earn: &'static str,
    pub kind: StrategyKind,
    pub mode: StrategyMode,
    /// Índice de pool dentro de la fuente de yield.
    pub pid: u64,
    pub alloc_point: u64,
    /// Nombre del contrato farm/staking del que se cosecha.
    pub yield_source: &'static str,
    pub earned_to_up: LegSpec,
    pub earned_to_token0: LegSpec,
    pub earned_to_token1: LegSpec,
    pub buy_back_router0: Option<&'static str>,
    pub buy_back_router1: Option<&'static str>,
    /// Router con el que la estrategia recompone el want LP.
    pub want_router: Option<&'static str>,
    /// Token de distribución de la fuente de yield cuando no es el default.
    pub reward_token: Option<&'static str>,
    pub fees: FeeOverrides,
}

impl StrategyDescriptor {
    /// Nombre único del artifact de la estrategia. También es la clave de
    /// deduplicación de la tabla: filas repetidas se saltan, no se mezclan.
    pub fn artifact_name(&self) -> String {
        let collect = match self.mode {
            StrategyMode::CollectOnly => "_collect",
            StrategyMode::Accumulate => "",
        };
        format!("{}_{}_Earn_{}{}", self.kind.contract_name(), self.want, self.earn, collect)
    }

    /// Un want con '-' en el nombre es un par de liquidez.
    pub fn is_pair_want(&self) -> bool {
        self.want.contains('-')
    }

    pub fn is_collect(&self) -> bool {
        matches!(self.mode, StrategyMode::CollectOnly)
    }
}
