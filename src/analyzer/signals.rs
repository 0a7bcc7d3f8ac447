//! Keyword signals detected in a user story

/// Any of these marks a shopping-cart story
pub const CART_KEYWORDS: &[&str] = &["cart", "add"];

/// Any of these marks a story that changes item quantities
pub const QUANTITY_KEYWORDS: &[&str] = &["quantity", "modify"];

/// The two facts the catalog selection depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub is_cart_story: bool,
    pub has_quantity_update: bool,
}

impl Signals {
    /// Detect signals by case-insensitive substring match
    ///
    /// Matches anywhere in the text, so "address" counts as "add".
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            is_cart_story: contains_any(&lowered, CART_KEYWORDS),
            has_quantity_update: contains_any(&lowered, QUANTITY_KEYWORDS),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_cart_and_quantity() {
        let signals = Signals::detect("I want to add items to my CART and change the Quantity");
        assert!(signals.is_cart_story);
        assert!(signals.has_quantity_update);
    }

    #[test]
    fn test_detect_modify_counts_as_quantity() {
        let signals = Signals::detect("Modify the basket");
        assert!(!signals.is_cart_story);
        assert!(signals.has_quantity_update);
    }

    #[test]
    fn test_detect_nothing() {
        assert_eq!(
            Signals::detect("As a user, I want to checkout my order"),
            Signals::default()
        );
    }

    #[test]
    fn test_address_matches_add() {
        assert!(Signals::detect("Update my shipping address").is_cart_story);
    }
}
