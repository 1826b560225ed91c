use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Fractional digits kept in tic labels; anything finer is float noise from
/// stepping by decimal intervals.
const TIC_LABEL_MAX_DECIMALS: u32 = 12;

/// Formats a tic label without binary floating-point artifacts.
///
/// `0.30000000000000004` renders as `0.3`, `100.0` as `100`. Values outside
/// the range `Decimal` can hold fall back to the plain f64 formatting.
#[must_use]
pub fn format_tic_label(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp(TIC_LABEL_MAX_DECIMALS)
            .normalize()
            .to_string(),
        None => format!("{value}"),
    }
}
