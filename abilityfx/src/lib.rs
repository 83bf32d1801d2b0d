extern crate alloc;

pub mod abilities;
pub mod battle;
pub mod battle_log;
pub mod common;
pub mod effect;
pub mod error;
