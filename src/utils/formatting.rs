//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `$12.50`, `-€3.10`: sign goes before the currency symbol.
pub fn format_currency(symbol: &str, value: f64) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    // avoid printing "-$0.00" for tiny negative rounding leftovers
    if v < 0.0 && (v * 100.0).round() != 0.0 {
        format!("-{}{:.2}", symbol, v.abs())
    } else {
        format!("{}{:.2}", symbol, v.abs())
    }
}

pub fn format_km(km: f64) -> String {
    format!("{:.1} km", km)
}
