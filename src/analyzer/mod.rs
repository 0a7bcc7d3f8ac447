//! Requirement classifier
//!
//! Turns a user story into requirement records. Two keyword signals decide
//! which entries of the static [`catalog`] apply; nothing else about the
//! text is interpreted.
//!
//! ```
//! use storyreq::analyzer::analyze;
//!
//! let outcome = analyze("As a shopper, I want to add items to my cart");
//! let result = outcome.as_analysis().unwrap();
//! assert_eq!(result.functional_requirements.len(), 9);
//! assert_eq!(result.gaps_identified.len(), 4);
//! ```

pub mod catalog;
pub mod signals;

use crate::core::input::{StoryInput, UserStory};
use crate::entities::{AnalysisOutcome, AnalysisResult, ErrorResult};

pub use signals::Signals;

/// Analyze raw input, returning the error object if it is not a usable story
pub fn analyze(input: impl Into<StoryInput>) -> AnalysisOutcome {
    match input.into().validate() {
        Ok(story) => AnalysisOutcome::Analysis(analyze_story(&story)),
        Err(err) => {
            tracing::debug!(reason = %err.reason(), "rejected user story input");
            AnalysisOutcome::Error(ErrorResult::from(&err))
        }
    }
}

/// Analyze a validated user story
pub fn analyze_story(story: &UserStory) -> AnalysisResult {
    let signals = Signals::detect(story.as_str());
    tracing::debug!(
        is_cart_story = signals.is_cart_story,
        has_quantity_update = signals.has_quantity_update,
        "detected story signals"
    );

    let result = AnalysisResult {
        user_story: story.as_str().to_string(),
        functional_requirements: catalog::functional_for(signals),
        non_functional_requirements: catalog::non_functional_for(signals),
        edge_cases: catalog::edge_cases_for(signals),
        gaps_identified: catalog::gaps(),
    };
    tracing::trace!(counts = %result.counts(), "assembled analysis");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::INVALID_INPUT_MESSAGE;
    use serde_json::json;

    fn fr_ids(result: &AnalysisResult) -> Vec<String> {
        result
            .functional_requirements
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn test_cart_story_with_quantity() {
        let outcome = analyze("As a user, I want to add items to my cart and update the quantity");
        let result = outcome.as_analysis().unwrap();

        assert_eq!(result.functional_requirements.len(), 10);
        assert_eq!(result.non_functional_requirements.len(), 3);
        assert_eq!(result.edge_cases.len(), 4);
        assert_eq!(result.gaps_identified.len(), 4);
        insta::assert_snapshot!(
            fr_ids(result).join(","),
            @"FR001,FR002,FR003,FR004,FR005,FR006,FR007,FR008,FR009,FR010"
        );
    }

    #[test]
    fn test_cart_story_without_quantity_skips_fr002() {
        let outcome = analyze("As a shopper I want a cart");
        let result = outcome.as_analysis().unwrap();

        assert_eq!(result.functional_requirements.len(), 9);
        insta::assert_snapshot!(
            fr_ids(result).join(","),
            @"FR001,FR003,FR004,FR005,FR006,FR007,FR008,FR009,FR010"
        );
    }

    #[test]
    fn test_non_cart_story_only_gaps() {
        let outcome = analyze("As a user, I want to checkout my order");
        let result = outcome.as_analysis().unwrap();

        assert!(result.functional_requirements.is_empty());
        assert!(result.non_functional_requirements.is_empty());
        assert!(result.edge_cases.is_empty());
        assert_eq!(result.gaps_identified, catalog::gaps());
    }

    #[test]
    fn test_quantity_without_cart_emits_nothing_gated() {
        let outcome = analyze("I want to modify the quantity of my order");
        let result = outcome.as_analysis().unwrap();
        assert!(result.functional_requirements.is_empty());
        assert_eq!(result.counts().gaps, 4);
    }

    #[test]
    fn test_empty_input_is_error() {
        let outcome = analyze("");
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": INVALID_INPUT_MESSAGE})
        );
    }

    #[test]
    fn test_non_string_input_is_error() {
        for value in [json!(42), json!(true), json!(["cart"]), json!({"cart": 1}), json!(null)] {
            let outcome = analyze(value);
            assert_eq!(outcome, AnalysisOutcome::Error(ErrorResult::invalid_input()));
        }
    }

    #[test]
    fn test_user_story_preserved_verbatim() {
        let text = "  Add To CART, Modify Quantity  ";
        let outcome = analyze(text);
        assert_eq!(outcome.as_analysis().unwrap().user_story, text);
    }

    #[test]
    fn test_idempotent() {
        let text = "I add things to the cart";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_fr002_matches_catalog_text() {
        let outcome = analyze("modify cart");
        let result = outcome.as_analysis().unwrap();
        let fr002 = &result.functional_requirements[1];
        assert_eq!(fr002.id.to_string(), "FR002");
        assert_eq!(
            fr002.description,
            "User can update product quantities in the cart"
        );
        assert_eq!(fr002.source, "Derived from user story");
    }

    #[test]
    fn test_full_cart_story_document() {
        let outcome = analyze("As a user, I want to add items to my cart and update the quantity");
        let json = crate::core::loader::to_json_pretty(&outcome).unwrap();
        insta::assert_snapshot!(json, @r#"
{
    "user_story": "As a user, I want to add items to my cart and update the quantity",
    "functional_requirements": [
        {
            "id": "FR001",
            "description": "User can add products to the shopping cart",
            "priority": "High",
            "test_complexity": "Low",
            "category": "Core Functionality",
            "testable": true,
            "source": "Derived from user story"
        },
        {
            "id": "FR002",
            "description": "User can update product quantities in the cart",
            "priority": "High",
            "test_complexity": "Low",
            "category": "Core Functionality",
            "testable": true,
            "source": "Derived from user story"
        },
        {
            "id": "FR003",
            "description": "User can remove items from the shopping cart",
            "priority": "High",
            "test_complexity": "Low",
            "category": "Core Functionality",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR004",
            "description": "Cart displays total price including applicable taxes",
            "priority": "High",
            "test_complexity": "Medium",
            "category": "Pricing & Calculation",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR005",
            "description": "System restricts maximum quantity of a single product to 10 units",
            "priority": "High",
            "test_complexity": "Low",
            "category": "Business Rules",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR006",
            "description": "System prevents adding out-of-stock products to the cart",
            "priority": "High",
            "test_complexity": "Medium",
            "category": "Validation",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR007",
            "description": "System displays item availability status in the cart",
            "priority": "Medium",
            "test_complexity": "Low",
            "category": "Validation",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR008",
            "description": "User receives confirmation when items are added or removed from the cart",
            "priority": "Medium",
            "test_complexity": "Low",
            "category": "User Feedback",
            "testable": true,
            "source": "Acceptance Criteria"
        },
        {
            "id": "FR009",
            "description": "System validates quantity input to prevent zero or negative values",
            "priority": "High",
            "test_complexity": "Medium",
            "category": "Validation",
            "testable": true,
            "source": "Implicit business rule"
        },
        {
            "id": "FR010",
            "description": "System recalculates cart total dynamically when quantities change",
            "priority": "Medium",
            "test_complexity": "Low",
            "category": "Pricing & Calculation",
            "testable": true,
            "source": "Implicit pricing behavior"
        }
    ],
    "non_functional_requirements": [
        {
            "id": "NFR001",
            "description": "Shopping cart data shall persist throughout the active user session without data loss",
            "type": "Reliability",
            "measurable": true,
            "test_complexity": "Medium",
            "source": "Acceptance Criteria"
        },
        {
            "id": "NFR002",
            "description": "Cart add, update, and remove operations shall complete within 2 seconds under normal load",
            "type": "Performance",
            "measurable": true,
            "test_complexity": "Medium",
            "source": "Implicit e-commerce performance expectation"
        },
        {
            "id": "NFR003",
            "description": "Shopping cart functionality shall not be accessible to unauthenticated users",
            "type": "Security",
            "measurable": false,
            "test_complexity": "High",
            "source": "Implicit security requirement"
        }
    ],
    "edge_cases": [
        {
            "id": "EC001",
            "description": "User attempts to add more than the allowed quantity",
            "scenario": "Quantity exceeds limit of 10"
        },
        {
            "id": "EC002",
            "description": "User attempts to add an out-of-stock product",
            "scenario": "Inventory count is zero"
        },
        {
            "id": "EC003",
            "description": "User enters zero or negative quantity",
            "scenario": "Invalid quantity input"
        },
        {
            "id": "EC004",
            "description": "User session expires with items in the cart",
            "scenario": "Session timeout"
        }
    ],
    "gaps_identified": [
        "User authentication and authorization behavior is not specified",
        "Tax calculation rules (region, rounding) are not defined",
        "Error handling behavior for cart failures is unclear",
        "Cross-session or cross-device cart persistence is not defined"
    ]
}
"#);
    }

    #[test]
    fn test_analysis_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| analyze("add to cart")))
            .collect();
        let first = analyze("add to cart");
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }
}
