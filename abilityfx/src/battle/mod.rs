mod battle;
mod boosts;
mod field;
mod mon;
mod moves;
mod options;
mod queue;
mod services;
mod types;

pub use battle::{
    Battle,
    BattleState,
};
pub use boosts::{
    BattleStat,
    BoostTable,
    StageChange,
};
pub use field::Field;
pub use mon::{
    AbilityLedger,
    AbilitySlot,
    AbilitySource,
    Mon,
    MonData,
    MonHandle,
};
pub use moves::{
    Move,
    MoveCategory,
    MoveFlag,
};
pub use options::{
    BattleEngineOptions,
    BattleOptions,
    FieldData,
};
pub use queue::{
    ActionQueue,
    BattleAction,
};
pub use services::{
    AbilityObserver,
    ImmediateItemTransfers,
    ItemTransferRequest,
    ItemTransferService,
    Localizer,
    MessageArgs,
    PresentationRequest,
    TemplateLocalizer,
};
pub use types::{
    Status,
    Terrain,
    Type,
    Weather,
};
