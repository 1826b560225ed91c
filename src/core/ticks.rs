use serde::{Deserialize, Serialize};

/// Fraction of the span added on each side before choosing an interval.
const RANGE_MARGIN_RATIO: f64 = 0.05;
/// Minor tics per major interval.
const TICS_PER_INTERVAL: i64 = 10;
/// Beyond this magnitude of `position / step`, f64 can no longer tell
/// neighbouring tics apart.
const MAX_EXACT_TIC_INDEX: f64 = 4_503_599_627_370_496.0;

/// One axis tic in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tic {
    pub position: f64,
    pub is_major: bool,
    /// Present on major tics only.
    pub label: Option<f64>,
}

impl Tic {
    #[must_use]
    pub fn minor(position: f64) -> Self {
        Self {
            position,
            is_major: false,
            label: None,
        }
    }

    #[must_use]
    pub fn major(position: f64) -> Self {
        Self {
            position,
            is_major: true,
            label: Some(position),
        }
    }
}

/// Output of [`generate_tics`].
#[derive(Debug, Clone, PartialEq)]
pub struct TicLayout {
    pub tics: Vec<Tic>,
    /// Working range the tics were laid over. When padding was requested this
    /// is the snapped range that should be written back to the axis.
    pub range: (f64, f64),
    /// Major interval, a power of ten.
    pub major_interval: f64,
    pub padded: bool,
}

/// Derives round-number tics for `[lo, hi]`.
///
/// Returns `None` when no tics are knowable: a degenerate range without
/// padding, non-finite bounds, or a range too narrow for its magnitude.
#[must_use]
pub fn generate_tics(lo: f64, hi: f64, pad: bool) -> Option<TicLayout> {
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }

    let (mut lo, mut hi) = if lo == hi {
        if !pad {
            return None;
        }
        if lo == 0.0 {
            (-1.0, 1.0)
        } else {
            let margin = lo.abs() * RANGE_MARGIN_RATIO;
            (lo - margin, hi + margin)
        }
    } else {
        let margin = (hi - lo) * RANGE_MARGIN_RATIO;
        (lo - margin, hi + margin)
    };

    let exponent = round_half_up((hi - lo).abs().log10());
    if !exponent.is_finite() {
        return None;
    }
    let major_interval = 10f64.powi(exponent as i32);
    if !major_interval.is_finite() || major_interval == 0.0 {
        return None;
    }

    if pad {
        lo = (lo / major_interval).floor() * major_interval;
        let high = (hi / major_interval).floor() * major_interval;
        if hi != high {
            hi = high + major_interval;
        }
    }

    let step = major_interval / TICS_PER_INTERVAL as f64;
    let first_index = round_half_up(lo / step);
    if first_index.abs() > MAX_EXACT_TIC_INDEX || (hi / step).abs() > MAX_EXACT_TIC_INDEX {
        return None;
    }

    let limit = hi + 0.5 * step;
    let mut tics = Vec::new();
    let mut index = first_index as i64;
    loop {
        let position = index as f64 * major_interval / TICS_PER_INTERVAL as f64;
        if position > limit {
            break;
        }
        if index.rem_euclid(TICS_PER_INTERVAL) == 0 {
            tics.push(Tic::major(position));
        } else {
            tics.push(Tic::minor(position));
        }
        index += 1;
    }

    Some(TicLayout {
        tics,
        range: (lo, hi),
        major_interval,
        padded: pad,
    })
}

/// Rounds ties toward positive infinity, so `-0.5` becomes `0`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{generate_tics, round_half_up};

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn every_tenth_tic_is_major() {
        let layout = generate_tics(0.0, 1.0, false).expect("tics");
        for tic in &layout.tics {
            let index = (tic.position / (layout.major_interval / 10.0)).round() as i64;
            assert_eq!(tic.is_major, index % 10 == 0, "tic at {}", tic.position);
            assert_eq!(tic.label.is_some(), tic.is_major);
        }
    }

    #[test]
    fn negative_degenerate_value_keeps_ordered_range() {
        let layout = generate_tics(-40.0, -40.0, true).expect("tics");
        assert!(layout.range.0 < -40.0);
        assert!(layout.range.1 > -40.0);
    }

    #[test]
    fn non_finite_bounds_are_not_knowable() {
        assert!(generate_tics(f64::NAN, 1.0, true).is_none());
        assert!(generate_tics(0.0, f64::INFINITY, false).is_none());
    }
}
