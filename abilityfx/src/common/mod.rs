mod fraction;
mod hash;
mod id;
mod test_util;

pub use fraction::{
    Fraction,
    apply_fraction,
    fraction_of_at_least_one,
};
pub use hash::{
    FastHashMap,
    FastHashSet,
};
pub use id::{
    Id,
    Identifiable,
};
#[cfg(test)]
pub use test_util::{
    test_string_deserialization,
    test_string_serialization,
};
