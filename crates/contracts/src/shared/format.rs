//! Display formatting for amounts shown on the site.

/// Currency sign used for every amount on the site.
pub const RUPEE: char = '₹';

/// Formats an integer with comma thousands separators
///
/// # Examples
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a rupee amount: `₹25,000`, `-₹1,200`
pub fn format_rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}", sign, RUPEE, format_thousands(amount.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(25000), "25,000");
        assert_eq!(format_thousands(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(25000), "₹25,000");
        assert_eq!(format_rupees(500), "₹500");
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(-1200), "-₹1,200");
    }
}
