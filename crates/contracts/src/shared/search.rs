//! Case-insensitive substring matching shared by every list filter.

/// `true` when `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `true` when any element of `items` contains `needle`, ignoring case.
///
/// An empty needle matches everything, including an empty list.
pub fn any_contains_ignore_case<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    items
        .iter()
        .any(|item| item.as_ref().to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Mumbai, Maharashtra", "mumbai"));
        assert!(contains_ignore_case("Mumbai, Maharashtra", "MUMBAI"));
        assert!(contains_ignore_case("Assisted Living", "assisted"));
        assert!(!contains_ignore_case("Pune", "mumbai"));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn test_any_contains_ignore_case() {
        let amenities = ["24/7 Care Staff", "Memory Care"];
        assert!(any_contains_ignore_case(&amenities, "memory"));
        assert!(!any_contains_ignore_case(&amenities, "pool"));
        assert!(any_contains_ignore_case::<&str>(&[], ""));
        assert!(!any_contains_ignore_case::<&str>(&[], "care"));
    }
}
