//! Rating normalization shared by the filter and the add-entry draft.

/// Lowest rating a record or filter can hold.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a record or filter can hold.
pub const MAX_RATING: f64 = 5.0;

/// Normalize a raw rating into `[MIN_RATING, MAX_RATING]`.
///
/// NaN (a failed numeric parse) becomes `MIN_RATING`; everything else is
/// clamped, infinities included.
pub fn normalize_rating(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_RATING;
    }
    value.clamp(MIN_RATING, MAX_RATING)
}

/// Parse user-typed text the way a numeric form input does.
///
/// Blank input reads as `0.0`, anything unparsable reads as NaN. Only
/// decimal notation counts as numeric, so words such as `inf` or `NaN` are
/// unparsable; an exponent that overflows still yields an infinity. The
/// result is not clamped; callers forward it to the store, which normalizes.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
