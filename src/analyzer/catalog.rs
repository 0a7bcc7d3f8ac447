//! Static requirement catalog for shopping-cart stories
//!
//! Every record an analysis can emit is defined here, in emission order.
//! Ids, wording and ratings are fixed; the analyzer only decides which
//! entries apply.

use crate::analyzer::signals::Signals;
use crate::core::entity::{Priority, QualityAttribute, TestComplexity};
use crate::core::identity::{RecordId, RecordKind};
use crate::entities::{EdgeCase, FunctionalRequirement, NonFunctionalRequirement};

/// Condition under which a catalog entry is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Any cart story
    CartStory,
    /// Cart stories that also mention changing quantities
    QuantityUpdate,
}

impl Gate {
    pub fn admits(&self, signals: Signals) -> bool {
        match self {
            Gate::CartStory => signals.is_cart_story,
            Gate::QuantityUpdate => signals.is_cart_story && signals.has_quantity_update,
        }
    }
}

/// Catalog entry for a functional requirement
#[derive(Debug, Clone, Copy)]
pub struct FunctionalTemplate {
    pub id: RecordId,
    pub description: &'static str,
    pub priority: Priority,
    pub test_complexity: TestComplexity,
    pub category: &'static str,
    pub testable: bool,
    pub source: &'static str,
    pub gate: Gate,
}

impl FunctionalTemplate {
    pub fn to_record(&self) -> FunctionalRequirement {
        FunctionalRequirement {
            id: self.id,
            description: self.description.to_string(),
            priority: self.priority,
            test_complexity: self.test_complexity,
            category: self.category.to_string(),
            testable: self.testable,
            source: self.source.to_string(),
        }
    }
}

/// Catalog entry for a non-functional requirement
#[derive(Debug, Clone, Copy)]
pub struct NonFunctionalTemplate {
    pub id: RecordId,
    pub description: &'static str,
    pub nfr_type: QualityAttribute,
    pub measurable: bool,
    pub test_complexity: TestComplexity,
    pub source: &'static str,
}

impl NonFunctionalTemplate {
    pub fn to_record(&self) -> NonFunctionalRequirement {
        NonFunctionalRequirement {
            id: self.id,
            description: self.description.to_string(),
            nfr_type: self.nfr_type,
            measurable: self.measurable,
            test_complexity: self.test_complexity,
            source: self.source.to_string(),
        }
    }
}

/// Catalog entry for an edge case
#[derive(Debug, Clone, Copy)]
pub struct EdgeCaseTemplate {
    pub id: RecordId,
    pub description: &'static str,
    pub scenario: &'static str,
}

impl EdgeCaseTemplate {
    pub fn to_record(&self) -> EdgeCase {
        EdgeCase {
            id: self.id,
            description: self.description.to_string(),
            scenario: self.scenario.to_string(),
        }
    }
}

const fn fr(n: u16) -> RecordId {
    RecordId::new(RecordKind::Functional, n)
}

const fn nfr(n: u16) -> RecordId {
    RecordId::new(RecordKind::NonFunctional, n)
}

const fn ec(n: u16) -> RecordId {
    RecordId::new(RecordKind::EdgeCase, n)
}

pub static FUNCTIONAL: [FunctionalTemplate; 10] = [
    FunctionalTemplate {
        id: fr(1),
        description: "User can add products to the shopping cart",
        priority: Priority::High,
        test_complexity: TestComplexity::Low,
        category: "Core Functionality",
        testable: true,
        source: "Derived from user story",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(2),
        description: "User can update product quantities in the cart",
        priority: Priority::High,
        test_complexity: TestComplexity::Low,
        category: "Core Functionality",
        testable: true,
        source: "Derived from user story",
        gate: Gate::QuantityUpdate,
    },
    FunctionalTemplate {
        id: fr(3),
        description: "User can remove items from the shopping cart",
        priority: Priority::High,
        test_complexity: TestComplexity::Low,
        category: "Core Functionality",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(4),
        description: "Cart displays total price including applicable taxes",
        priority: Priority::High,
        test_complexity: TestComplexity::Medium,
        category: "Pricing & Calculation",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(5),
        description: "System restricts maximum quantity of a single product to 10 units",
        priority: Priority::High,
        test_complexity: TestComplexity::Low,
        category: "Business Rules",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(6),
        description: "System prevents adding out-of-stock products to the cart",
        priority: Priority::High,
        test_complexity: TestComplexity::Medium,
        category: "Validation",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(7),
        description: "System displays item availability status in the cart",
        priority: Priority::Medium,
        test_complexity: TestComplexity::Low,
        category: "Validation",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(8),
        description: "User receives confirmation when items are added or removed from the cart",
        priority: Priority::Medium,
        test_complexity: TestComplexity::Low,
        category: "User Feedback",
        testable: true,
        source: "Acceptance Criteria",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(9),
        description: "System validates quantity input to prevent zero or negative values",
        priority: Priority::High,
        test_complexity: TestComplexity::Medium,
        category: "Validation",
        testable: true,
        source: "Implicit business rule",
        gate: Gate::CartStory,
    },
    FunctionalTemplate {
        id: fr(10),
        description: "System recalculates cart total dynamically when quantities change",
        priority: Priority::Medium,
        test_complexity: TestComplexity::Low,
        category: "Pricing & Calculation",
        testable: true,
        source: "Implicit pricing behavior",
        gate: Gate::CartStory,
    },
];

pub static NON_FUNCTIONAL: [NonFunctionalTemplate; 3] = [
    NonFunctionalTemplate {
        id: nfr(1),
        description: "Shopping cart data shall persist throughout the active user session without data loss",
        nfr_type: QualityAttribute::Reliability,
        measurable: true,
        test_complexity: TestComplexity::Medium,
        source: "Acceptance Criteria",
    },
    NonFunctionalTemplate {
        id: nfr(2),
        description: "Cart add, update, and remove operations shall complete within 2 seconds under normal load",
        nfr_type: QualityAttribute::Performance,
        measurable: true,
        test_complexity: TestComplexity::Medium,
        source: "Implicit e-commerce performance expectation",
    },
    NonFunctionalTemplate {
        id: nfr(3),
        description: "Shopping cart functionality shall not be accessible to unauthenticated users",
        nfr_type: QualityAttribute::Security,
        measurable: false,
        test_complexity: TestComplexity::High,
        source: "Implicit security requirement",
    },
];

pub static EDGE_CASES: [EdgeCaseTemplate; 4] = [
    EdgeCaseTemplate {
        id: ec(1),
        description: "User attempts to add more than the allowed quantity",
        scenario: "Quantity exceeds limit of 10",
    },
    EdgeCaseTemplate {
        id: ec(2),
        description: "User attempts to add an out-of-stock product",
        scenario: "Inventory count is zero",
    },
    EdgeCaseTemplate {
        id: ec(3),
        description: "User enters zero or negative quantity",
        scenario: "Invalid quantity input",
    },
    EdgeCaseTemplate {
        id: ec(4),
        description: "User session expires with items in the cart",
        scenario: "Session timeout",
    },
];

/// Reported for every story, cart-related or not
pub static GAPS: [&str; 4] = [
    "User authentication and authorization behavior is not specified",
    "Tax calculation rules (region, rounding) are not defined",
    "Error handling behavior for cart failures is unclear",
    "Cross-session or cross-device cart persistence is not defined",
];

/// Functional requirements admitted by the signals, in catalog order
pub fn functional_for(signals: Signals) -> Vec<FunctionalRequirement> {
    FUNCTIONAL
        .iter()
        .filter(|t| t.gate.admits(signals))
        .map(FunctionalTemplate::to_record)
        .collect()
}

/// Non-functional requirements for the signals (all or nothing)
pub fn non_functional_for(signals: Signals) -> Vec<NonFunctionalRequirement> {
    if !signals.is_cart_story {
        return Vec::new();
    }
    NON_FUNCTIONAL
        .iter()
        .map(NonFunctionalTemplate::to_record)
        .collect()
}

/// Edge cases for the signals (all or nothing)
pub fn edge_cases_for(signals: Signals) -> Vec<EdgeCase> {
    if !signals.is_cart_story {
        return Vec::new();
    }
    EDGE_CASES.iter().map(EdgeCaseTemplate::to_record).collect()
}

pub fn gaps() -> Vec<String> {
    GAPS.iter().map(|g| g.to_string()).collect()
}

/// Every catalog entry, ungated
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CatalogListing {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functional_requirements: Vec<FunctionalRequirement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_functional_requirements: Vec<NonFunctionalRequirement>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edge_cases: Vec<EdgeCase>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gaps_identified: Vec<String>,
}

impl CatalogListing {
    pub fn full() -> Self {
        Self {
            functional_requirements: FUNCTIONAL.iter().map(FunctionalTemplate::to_record).collect(),
            non_functional_requirements: NON_FUNCTIONAL
                .iter()
                .map(NonFunctionalTemplate::to_record)
                .collect(),
            edge_cases: EDGE_CASES.iter().map(EdgeCaseTemplate::to_record).collect(),
            gaps_identified: gaps(),
        }
    }

    pub fn sections(&self) -> crate::entities::Sections<'_> {
        crate::entities::Sections {
            functional: &self.functional_requirements,
            non_functional: &self.non_functional_requirements,
            edge_cases: &self.edge_cases,
            gaps: &self.gaps_identified,
        }
    }
}
