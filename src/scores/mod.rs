pub mod risk;

pub use risk::{RiskAssessment, RiskScorer, RiskThresholds, RiskTier};
