//! Number formatting shared by the backend (card values) and the frontend
//! (chart labels). Brazilian style: `.` groups thousands, `,` separates decimals.

use super::indicators::ValueFormat;

/// Inserts `.` between every three digits of an unsigned integer string.
///
/// # Examples
/// ```
/// use contracts::shared::format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1.234.567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a number with grouped thousands and `decimals` digits after `,`.
pub fn format_decimal(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // -0,00 reads as noise on a card
    let rounds_to_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };

    let grouped = group_thousands(integer_part);
    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// `R$ 1.234,56`
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_decimal(value, 2))
}

/// `R$ 1.235`, used for bar labels where cents are clutter
pub fn format_money_whole(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_decimal(value, 0))
}

/// `12,5%`
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_decimal(value, decimals))
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_money(value, currency),
        ValueFormat::Number { decimals } => format_decimal(value, *decimals),
        ValueFormat::Percent { decimals } => format_percent(value, *decimals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("1234567890"), "1.234.567.890");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56, "R$"), "R$ 1.234,56");
        assert_eq!(format_money(0.0, "R$"), "R$ 0,00");
        assert_eq!(format_money(-1234.5, "R$"), "R$ -1.234,50");
        assert_eq!(format_money(1234567.891, "R$"), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_money_whole() {
        assert_eq!(format_money_whole(1234.56, "R$"), "R$ 1.235");
        assert_eq!(format_money_whole(-50.0, "R$"), "R$ -50");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_decimal(-0.001, 2), "0,00");
        assert_eq!(format_percent(-0.04, 1), "0,0%");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345, 1), "12,3%");
        assert_eq!(format_percent(-7.0, 1), "-7,0%");
        assert_eq!(format_percent(1500.0, 1), "1.500,0%");
    }

    #[test]
    fn test_format_value_dispatch() {
        let money = ValueFormat::Money {
            currency: "R$".into(),
        };
        assert_eq!(format_value(150.0, &money), "R$ 150,00");
        assert_eq!(format_value(33.333, &ValueFormat::Number { decimals: 1 }), "33,3");
        assert_eq!(format_value(50.0, &ValueFormat::Percent { decimals: 1 }), "50,0%");
    }
}
