//! ROI and payback against a baseline competitor.
//!
//! ROI is expressed relative to the evaluated vendor's own spend:
//! `(competitor_tco - vendor_tco) / vendor_tco`. Computing it against the
//! competitor's spend instead would change the economic interpretation, so
//! callers get exactly this formula with a 0.0 sentinel on a zero base.

use crate::core::RoiSummary;

/// Fractional return relative to the vendor's own spend. 0.0 when the
/// vendor's TCO is zero.
pub fn total_roi(competitor_tco: f64, vendor_tco: f64) -> f64 {
    if vendor_tco <= 0.0 {
        return 0.0;
    }
    (competitor_tco - vendor_tco) / vendor_tco
}

/// Months until cumulative savings cover the upfront cost.
///
/// - Zero upfront cost pays back immediately: `Some(0.0)`.
/// - Non-positive savings never pay back: `None` (rendered "n/a").
pub fn payback_months(upfront: f64, total_savings: f64, years: u32) -> Option<f64> {
    if upfront <= 0.0 {
        return Some(0.0);
    }
    let horizon_months = f64::from(years) * 12.0;
    if horizon_months <= 0.0 {
        return None;
    }
    let monthly_savings = total_savings / horizon_months;
    if monthly_savings <= 0.0 {
        None
    } else {
        Some(upfront / monthly_savings)
    }
}

/// Build the ROI summary for one vendor against its baseline competitor.
pub fn summarize(
    vendor_tco: f64,
    competitor_tco: Option<f64>,
    upfront: f64,
    years: u32,
) -> RoiSummary {
    let roi = match competitor_tco {
        Some(baseline) => total_roi(baseline, vendor_tco),
        None => 0.0,
    };
    let payback = match competitor_tco {
        Some(baseline) => payback_months(upfront, baseline - vendor_tco, years),
        None => None,
    };
    RoiSummary {
        total_roi: roi,
        roi_percentage: roi * 100.0,
        payback_months: payback,
    }
}
