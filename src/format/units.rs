//! Fixed-point unit conversion

use crate::model::{ModelError, Result, U256};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Convert base units to a display decimal
///
/// The decimals are divided off in integer arithmetic first, so any uint256
/// amount whose whole-token part fits a `Decimal` converts.
pub fn to_display_units(base: U256, decimals: u32) -> Result<Decimal> {
    let out_of_range = || ModelError::AmountOutOfRange(base);

    let scale = pow10(decimals).ok_or_else(out_of_range)?;
    let (whole, fraction) = base.div_rem(scale);
    let whole = scaled_decimal(whole, 0).ok_or_else(out_of_range)?;
    let fraction = scaled_decimal(fraction, decimals).ok_or_else(out_of_range)?;

    whole
        .checked_add(fraction)
        .map(|display| display.normalize())
        .ok_or_else(out_of_range)
}

/// Convert a display amount such as `"1.5"` to base units
pub fn parse_units(input: &str, decimals: u32) -> Result<U256> {
    let invalid = |reason| ModelError::InvalidAmount {
        input: input.to_string(),
        reason,
    };

    let value = Decimal::from_str(input.trim()).map_err(|_| invalid("not a decimal number"))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid("negative amount"));
    }

    let value = value.normalize();
    if value.scale() > decimals {
        return Err(invalid("too many fractional digits"));
    }

    let mantissa = U256::from(value.mantissa().unsigned_abs());
    pow10(decimals - value.scale())
        .and_then(|factor| mantissa.checked_mul(factor))
        .ok_or_else(|| invalid("amount overflows base units"))
}

/// Format a base-unit balance rounded to `precision` fractional digits
pub fn format_balance(base: U256, decimals: u32, precision: u32) -> Result<String> {
    let display = to_display_units(base, decimals)?;
    Ok(display
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string())
}

pub(crate) fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

/// `value / 10^scale` as a `Decimal`, if the integer fits its mantissa
pub(crate) fn scaled_decimal(value: U256, scale: u32) -> Option<Decimal> {
    let value = i128::try_from(u128::try_from(value).ok()?).ok()?;
    Decimal::try_from_i128_with_scale(value, scale).ok()
}
