use num::rational::Ratio;

/// An exact multiplier applied to battle values, such as move power or damage.
pub type Fraction = Ratio<u32>;

/// Applies a [`Fraction`] to an integer value, flooring the result.
pub fn apply_fraction(value: u32, fraction: Fraction) -> u32 {
    (Fraction::from_integer(value) * fraction).to_integer()
}

/// Returns `max * fraction`, flooring the result but never returning less than 1 for a
/// non-zero input.
///
/// Used for HP-relative healing and damage, which always move at least one HP.
pub fn fraction_of_at_least_one(max: u32, fraction: Fraction) -> u32 {
    if max == 0 || *fraction.numer() == 0 {
        return 0;
    }
    apply_fraction(max, fraction).max(1)
}
