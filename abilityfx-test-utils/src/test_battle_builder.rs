use std::sync::Arc;

use abilityfx::{
    abilities::{
        AbilityDefinition,
        AbilityRegistry,
        standard_abilities,
    },
    battle::{
        AbilityObserver,
        Battle,
        BattleEngineOptions,
        BattleOptions,
        ItemTransferService,
        Localizer,
        MonData,
        Terrain,
        Weather,
    },
};
use anyhow::Result;

use crate::ControlledRandomNumberGenerator;

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    abilities: Vec<AbilityDefinition>,
    standard_abilities: bool,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions::default(),
            abilities: Vec::new(),
            standard_abilities: true,
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }

        let mut abilities = self.abilities;
        if self.standard_abilities {
            abilities.extend(standard_abilities());
        }
        let registry = Arc::new(AbilityRegistry::new(abilities)?);

        Ok(Battle::new(self.options, self.engine_options, registry))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_debug_logs(mut self, debug_logs: bool) -> Self {
        self.engine_options.debug_logs = debug_logs;
        self
    }

    /// Should the standard ability catalogue be registered?
    pub fn with_standard_abilities(mut self, standard_abilities: bool) -> Self {
        self.standard_abilities = standard_abilities;
        self
    }

    /// Registers an additional ability.
    pub fn with_ability(mut self, ability: AbilityDefinition) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn with_weather(mut self, weather: Option<Weather>) -> Self {
        self.options.field.weather = weather;
        self
    }

    pub fn with_terrain(mut self, terrain: Option<Terrain>) -> Self {
        self.options.field.terrain = terrain;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.engine_options.localizer = localizer;
        self
    }

    pub fn with_item_transfers(mut self, item_transfers: Arc<dyn ItemTransferService>) -> Self {
        self.engine_options.item_transfers = item_transfers;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn AbilityObserver>) -> Self {
        self.engine_options.observers.push(observer);
        self
    }

    pub fn add_mon(mut self, mon: MonData) -> Self {
        self.options.mons.push(mon);
        self
    }

    /// Adds a creature from its JSON representation.
    ///
    /// Panics if the JSON is invalid.
    pub fn add_mon_json(self, json: &str) -> Self {
        let mon = serde_json::from_str(json).unwrap();
        self.add_mon(mon)
    }
}
