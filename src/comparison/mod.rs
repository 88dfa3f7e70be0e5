//! Comparative ranking over computed results.
//!
//! Comparison views show vendors in ascending total-TCO order with signed
//! deltas and percentage premiums against a reference vendor. The sort is
//! stable so ties keep catalog order.

use crate::core::CalculationResult;

/// Stable sort by ascending `total_tco`.
pub fn rank_by_tco(results: &mut [CalculationResult]) {
    results.sort_by(|a, b| {
        a.total_tco()
            .partial_cmp(&b.total_tco())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Signed TCO delta; positive means the evaluated vendor costs MORE than the
/// reference.
pub fn savings_delta(vendor_total: f64, reference_total: f64) -> f64 {
    vendor_total - reference_total
}

/// Percentage premium over the reference: `(other/reference - 1) * 100`.
/// 0.0 when the reference total is zero. Unrounded; rounding is a display
/// concern.
pub fn percent_premium(other_total: f64, reference_total: f64) -> f64 {
    if reference_total <= 0.0 {
        return 0.0;
    }
    (other_total / reference_total - 1.0) * 100.0
}

/// Index of the cheapest result other than `exclude`, if any.
pub fn cheapest_competitor(results: &[CalculationResult], exclude: usize) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != exclude)
        .min_by(|(_, a), (_, b)| {
            a.total_tco()
                .partial_cmp(&b.total_tco())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
