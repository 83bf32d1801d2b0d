mod error_assert;
mod item_transfers;
mod log_assert;
mod observer;
mod rng;
mod test_battle_builder;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use item_transfers::DelayedItemTransfers;
pub use log_assert::assert_new_logs_eq;
pub use observer::RecordingObserver;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use test_battle_builder::TestBattleBuilder;
