use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event with the given percent chance occurs.
///
/// Certain outcomes (0% and 100% or more) do not consume a value from the generator.
pub fn percent_chance(prng: &mut dyn PseudoRandomNumberGenerator, percent: u64) -> bool {
    match percent {
        0 => false,
        100.. => true,
        _ => range(prng, 0, 100) < percent,
    }
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}
