//! Currency rendering for user-facing messages.

const CURRENCY_SYMBOL: &str = "$";
const GROUPING_SEPARATOR: char = ',';

/// Formats `amount` as US dollars with two decimals and thousands grouping,
/// e.g. `-$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = body.split_at(body.find('.').unwrap_or(body.len()));
    let grouped = group_digits(int_part, GROUPING_SEPARATOR);
    let rounds_to_zero = body.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{}{}{}{}", sign, CURRENCY_SYMBOL, grouped, frac_part)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn negative_amounts_carry_a_sign() {
        assert_eq!(format_currency(-42.1), "-$42.10");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
