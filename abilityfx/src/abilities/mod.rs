mod ability;
mod ability_flags;
mod builder;
mod catalog;
mod registry;

pub use ability::{
    AbilityDefinition,
    AttrEntry,
};
pub use ability_flags::AbilityFlags;
pub use builder::AbilityBuilder;
pub use catalog::{
    standard_abilities,
    standard_registry,
};
pub use registry::AbilityRegistry;
