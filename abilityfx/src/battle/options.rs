use std::{
    fmt,
    sync::Arc,
};

use abilityfx_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::battle::{
    AbilityObserver,
    ImmediateItemTransfers,
    ItemTransferService,
    Localizer,
    MonData,
    TemplateLocalizer,
    Terrain,
    Weather,
};

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

/// Starting state of the field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub terrain: Option<Terrain>,
}

/// Options for a new battle.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// The initial seed for random number generation.
    ///
    /// This can be used to effectively replay or control a battle.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub field: FieldData,
    /// Creatures participating in the battle, in handle order.
    #[serde(default)]
    pub mons: Vec<MonData>,
}

/// Options that change how the battle engine itself behaves, which are likely common across all
/// battle instances.
///
/// Collaborators of the ability engine are injected here.
#[derive(Clone)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Should diagnostics be added to the battle log as `debug` events?
    pub debug_logs: bool,

    /// Text for ability trigger messages.
    pub localizer: Arc<dyn Localizer>,

    /// Approves held item transfers caused by abilities.
    pub item_transfers: Arc<dyn ItemTransferService>,

    /// Notified whenever an ability takes effect outside of simulation.
    pub observers: Vec<Arc<dyn AbilityObserver>>,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            debug_logs: false,
            localizer: Arc::new(TemplateLocalizer::with_defaults()),
            item_transfers: Arc::new(ImmediateItemTransfers),
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for BattleEngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleEngineOptions")
            .field("debug_logs", &self.debug_logs)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
