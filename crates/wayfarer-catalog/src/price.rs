//! Display-price normalization.
//!
//! The partner snapshot carries "from" prices as display strings tagged with
//! the currency the marketplace happened to quote, e.g. `"Price from EUR 89"`
//! or `"Price from CZK 1,890"`. Category pages show everything in USD, so
//! tagged strings are converted with a fixed rate table and re-rendered as
//! `"Price from $<n>"`. Anything that does not match a known tag (already-USD
//! strings, the "(see options)" placeholder, currencies we have no rate for)
//! passes through unchanged: prices here are cosmetic, not transactional, and
//! must never block page generation.

/// Prefix shared by every partner price display string.
pub const PRICE_PREFIX: &str = "Price from ";

/// USD per unit of source currency. Display-only rates, refreshed by hand
/// when the snapshot generator runs.
pub const USD_RATES: &[(&str, f64)] = &[("EUR", 1.08), ("CZK", 0.043), ("GBP", 1.27)];

/// Look up the USD rate for a currency code.
pub fn usd_rate(code: &str) -> Option<f64> {
    USD_RATES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
}

/// Normalize a partner price display string to USD.
///
/// Pure and idempotent: an already-USD string has no recognized currency tag
/// and comes back unchanged.
pub fn normalize_price_display(display: &str) -> String {
    match convert_to_usd(display) {
        Some(whole_usd) => format!("{}${}", PRICE_PREFIX, whole_usd),
        None => display.to_string(),
    }
}

/// Parse `"Price from <CODE> <amount>"` and convert to whole USD, rounding
/// to the nearest unit. `None` means "leave the string alone".
fn convert_to_usd(display: &str) -> Option<i64> {
    let tagged = display.strip_prefix(PRICE_PREFIX)?;
    let (code, amount) = tagged.split_once(' ')?;
    let rate = usd_rate(code)?;
    let amount = parse_amount(amount)?;
    Some((amount * rate).round() as i64)
}

/// Parse a marketplace amount: comma as thousands separator, period as
/// decimal point.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_conversion() {
        assert_eq!(normalize_price_display("Price from EUR 100"), "Price from $108");
    }

    #[test]
    fn test_czk_conversion() {
        assert_eq!(normalize_price_display("Price from CZK 1000"), "Price from $43");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(
            normalize_price_display("Price from CZK 1,890"),
            "Price from $81"
        );
        assert_eq!(
            normalize_price_display("Price from EUR 1,150"),
            "Price from $1242"
        );
    }

    #[test]
    fn test_decimal_amount() {
        // 89.50 * 1.08 = 96.66, rounds to 97.
        assert_eq!(
            normalize_price_display("Price from EUR 89.50"),
            "Price from $97"
        );
    }

    #[test]
    fn test_placeholder_passes_through() {
        assert_eq!(
            normalize_price_display("Price from (see options)"),
            "Price from (see options)"
        );
    }

    #[test]
    fn test_usd_passes_through() {
        assert_eq!(normalize_price_display("Price from $50"), "Price from $50");
    }

    #[test]
    fn test_unknown_currency_passes_through() {
        assert_eq!(
            normalize_price_display("Price from AUD 120"),
            "Price from AUD 120"
        );
    }

    #[test]
    fn test_missing_prefix_passes_through() {
        assert_eq!(normalize_price_display("EUR 100"), "EUR 100");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Price from EUR 100",
            "Price from CZK 1,890",
            "Price from $50",
            "Price from (see options)",
            "Price from AUD 120",
        ];
        for sample in samples {
            let once = normalize_price_display(sample);
            let twice = normalize_price_display(&once);
            assert_eq!(once, twice, "normalize must be idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_rate_lookup() {
        assert_eq!(usd_rate("EUR"), Some(1.08));
        assert_eq!(usd_rate("CZK"), Some(0.043));
        assert_eq!(usd_rate("XXX"), None);
    }
}
