//! Display-level formatting helpers.
//!
//! Stored result values are unrounded; every rounding decision lives here so
//! renderers agree on what the user sees.

use std::env;
use std::io::IsTerminal;

/// Format a currency amount with thousands separators, rounded to whole
/// units for display.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Compact currency for chart-style labels: `$1.2M`, `$450K`, `$320`.
pub fn format_currency_compact(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.0}K", sign, abs / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs)
    }
}

/// Percentage with one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Whole-percent display used for comparative premiums, e.g.
/// "costs 221% more".
pub fn format_percent_whole(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Payback months, or "n/a" for a vendor that never pays back.
pub fn format_payback(months: Option<f64>) -> String {
    match months {
        Some(m) if m <= 0.0 => "immediate".to_string(),
        Some(m) => format!("{:.1} mo", m),
        None => "n/a".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode for a stdout sink. File sinks are handled by the
    /// caller, which knows whether one is in play.
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

// NO_COLOR per no-color.org; otherwise require a tty
fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}
