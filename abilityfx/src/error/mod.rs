mod context;
mod errors;
mod wrap;

pub use anyhow::Error;
pub use errors::{
    DuplicateAbilityError,
    GeneralError,
    NotFoundError,
    general_error,
    not_found_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
