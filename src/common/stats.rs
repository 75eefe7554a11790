//! Simple reductions over numeric series
//!
//! Every function returns 0.0 on an empty series so callers never have to
//! special-case a run that played no rounds.

/// Arithmetic mean, 0.0 when empty
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Sample variance (n - 1 denominator)
///
/// 0.0 when empty and NaN for a single value, where the sample variance is
/// undefined.
pub fn sample_variance(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        1 => f64::NAN,
        n => {
            let m = mean(values.iter().copied());
            let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
            ss / (n - 1) as f64
        }
    }
}

/// Largest peak-to-current decline of a running total
///
/// `max_i (max_{j<=i} x_j - x_i)`, 0.0 when empty.
pub fn max_drawdown<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for v in values {
        peak = peak.max(v);
        worst = worst.max(peak - v);
    }
    worst
}

/// Largest value, 0.0 when empty
pub fn max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().reduce(f64::max).unwrap_or(0.0)
}

/// Smallest value, 0.0 when empty
pub fn min<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().reduce(f64::min).unwrap_or(0.0)
}
