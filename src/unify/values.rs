//! Raw cell value handling.
//!
//! Cells arrive as text of uncertain quality. Blank-ish markers must not
//! overwrite previously merged fields, and monetary text comes in Brazilian
//! ("R$ 1.234,56") as well as plain ("1234.56") shapes. Unparseable amounts
//! degrade to absent rather than failing the batch.

use rust_decimal::Decimal;

/// Returns true if a cell carries no usable value.
///
/// Besides whitespace, spreadsheet exports commonly emit "nan", "null" or a
/// bare dash for empty cells.
pub fn is_blank(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || matches!(trimmed.to_lowercase().as_str(), "nan" | "null" | "none" | "-")
}

/// Parses monetary cell text into an exact two-digit decimal.
///
/// Accepts an optional `R$`/`$` sigil, thousands separators, and either `.`
/// or `,` as the decimal separator. Returns `None` for blank or unparseable
/// input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use voucher_engine::unify::parse_money;
///
/// assert_eq!(parse_money("500.00"), Some(Decimal::new(50000, 2)));
/// assert_eq!(parse_money("R$ 1.234,56"), Some(Decimal::new(123456, 2)));
/// assert_eq!(parse_money("abc"), None);
/// ```
pub fn parse_money(raw: &str) -> Option<Decimal> {
    if is_blank(raw) {
        return None;
    }

    let mut text = raw.trim().to_lowercase();
    for sigil in ["r$", "$"] {
        if let Some(rest) = text.strip_prefix(sigil) {
            text = rest.trim_start().to_string();
            break;
        }
    }
    text.retain(|c| !c.is_whitespace());

    // Comma-decimal form: drop dot thousands separators, promote the comma.
    if text.contains(',') {
        text = text.replace('.', "").replace(',', ".");
    }

    text.parse::<Decimal>().ok().map(|d| d.round_dp(2))
}
