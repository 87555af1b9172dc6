//! Version comparison against the latest catalog version.

/// Whether `latest` is newer than `installed`.
///
/// Only the token before the first space is compared, so edition labels
/// such as `"1.6.3 (Special Edition)"` are ignored. Components are compared
/// numerically left to right; a missing or empty component counts as 0.
///
/// A component that is not a number counts as 0 as well. This is not a
/// validation step: `"1.6.3-beta"` reads as `1.6.0`, so
/// `has_update("1.6.3-beta", "1.6.0")` is `false`.
pub fn has_update(installed: &str, latest: &str) -> bool {
    let installed = components(installed);
    let latest = components(latest);

    for i in 0..installed.len().max(latest.len()) {
        let a = installed.get(i).copied().unwrap_or(0.0);
        let b = latest.get(i).copied().unwrap_or(0.0);
        if a < b {
            return true;
        }
        if a > b {
            return false;
        }
    }

    false
}

/// Leading dotted token of `version`, split into numeric components.
fn components(version: &str) -> Vec<f64> {
    let token = version.split(' ').next().unwrap_or_default();
    token.split('.').map(component).collect()
}

/// Numeric value of one component, 0 when it is empty or not a number.
///
/// Accepts decimal and exponent forms, `0x`/`0o`/`0b` integers, and the
/// exact spellings `Infinity`, `+Infinity` and `-Infinity`.
fn component(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    number(raw).filter(|n| !n.is_nan()).unwrap_or(0.0)
}

fn number(raw: &str) -> Option<f64> {
    match raw {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let prefixed = raw.get(..2).map(str::to_ascii_lowercase);
    let radix = match prefixed.as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_integer(&raw[2..], radix);
    }

    // Rust also parses "inf", "infinity" and "nan" in any case.
    if raw.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    raw.parse().ok()
}

fn radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
