use std::sync::{
    Arc,
    OnceLock,
};

use crate::{
    abilities::AbilityDefinition,
    common::{
        FastHashMap,
        Id,
        Identifiable,
    },
    error::{
        DuplicateAbilityError,
        Error,
        WrapOptionError,
        general_error,
    },
};

static GLOBAL_REGISTRY: OnceLock<Arc<AbilityRegistry>> = OnceLock::new();

/// Read-only table of ability definitions, keyed by ID.
#[derive(Debug, Default)]
pub struct AbilityRegistry {
    abilities: FastHashMap<Id, Arc<AbilityDefinition>>,
}

impl AbilityRegistry {
    /// Creates a new registry, rejecting duplicate IDs.
    pub fn new<I>(abilities: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = AbilityDefinition>,
    {
        let mut table = FastHashMap::default();
        for ability in abilities {
            let id = ability.id().clone();
            if table.contains_key(&id) {
                return Err(DuplicateAbilityError { id }.into());
            }
            table.insert(id, Arc::new(ability));
        }
        Ok(Self { abilities: table })
    }

    pub fn get(&self, id: &Id) -> Option<&Arc<AbilityDefinition>> {
        self.abilities.get(id)
    }

    /// Looks up an ability, failing if it does not exist.
    pub fn lookup(&self, id: &Id) -> Result<Arc<AbilityDefinition>, Error> {
        self.get(id)
            .cloned()
            .wrap_not_found_error_with_format(format_args!("ability {id}"))
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<AbilityDefinition>> {
        self.abilities.values()
    }

    /// Installs the process-wide registry.
    ///
    /// May only be called once per process.
    pub fn install_global(registry: AbilityRegistry) -> Result<Arc<AbilityRegistry>, Error> {
        let registry = Arc::new(registry);
        GLOBAL_REGISTRY
            .set(registry.clone())
            .map_err(|_| general_error("ability registry is already installed"))?;
        Ok(registry)
    }

    /// The process-wide registry, if installed.
    pub fn global() -> Option<Arc<AbilityRegistry>> {
        GLOBAL_REGISTRY.get().cloned()
    }
}
