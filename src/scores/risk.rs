use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::symptoms::SymptomSet;

pub const DEFAULT_MODERATE_THRESHOLD: usize = 1;
pub const DEFAULT_HIGH_THRESHOLD: usize = 3;

const LOW_RECOMMENDATIONS: &[&str] = &[
    "Maintain a healthy lifestyle.",
    "Avoid smoking and exposure to toxins.",
    "Get regular medical check-ups.",
    "Practice deep breathing exercises for lung health.",
];

const MODERATE_RECOMMENDATIONS: &[&str] = &[
    "Keep track of symptoms.",
    "Follow a healthy diet and exercise.",
    "Seek medical advice if symptoms persist.",
    "If symptoms persist for more than 2 weeks, consult a healthcare professional.",
];

const HIGH_RECOMMENDATIONS: &[&str] = &[
    "Schedule a medical check-up immediately.",
    "Consider uploading an X-ray or CT scan for further analysis.",
    "Avoid smoking and exposure to pollutants.",
    "Maintain a healthy lifestyle and regular monitoring.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk: No major symptoms detected.",
            RiskTier::Moderate => "Moderate Risk: Monitor symptoms.",
            RiskTier::High => "High Risk: Consult a doctor immediately.",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            RiskTier::Low => {
                "No major symptoms detected. Maintain a healthy lifestyle and monitor any future symptoms."
            }
            RiskTier::Moderate => {
                "You have some symptoms associated with lung conditions. If symptoms persist, consult a doctor for further evaluation."
            }
            RiskTier::High => {
                "Your symptoms indicate a potential risk for lung conditions. Upload a medical scan for analysis and consult a doctor."
            }
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => LOW_RECOMMENDATIONS,
            RiskTier::Moderate => MODERATE_RECOMMENDATIONS,
            RiskTier::High => HIGH_RECOMMENDATIONS,
        }
    }
}

/// Inclusive lower bounds on the symptom count for each elevated tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub moderate: usize,
    pub high: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: DEFAULT_MODERATE_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.moderate == 0 {
            bail!("risk.moderate must be at least 1");
        }
        if self.high <= self.moderate {
            bail!(
                "risk.high ({}) must be greater than risk.moderate ({})",
                self.high,
                self.moderate
            );
        }
        Ok(())
    }

    pub fn tier_for(&self, score: usize) -> RiskTier {
        if score >= self.high {
            RiskTier::High
        } else if score >= self.moderate {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: usize,
    pub tier: RiskTier,
    pub recommendations: &'static [&'static str],
}

impl RiskAssessment {
    pub fn headline(&self) -> &'static str {
        self.tier.headline()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    thresholds: RiskThresholds,
}

impl RiskScorer {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn score(&self, symptoms: SymptomSet) -> RiskAssessment {
        let score = symptoms.count();
        let tier = self.thresholds.tier_for(score);
        RiskAssessment {
            score,
            tier,
            recommendations: tier.recommendations(),
        }
    }
}

/// Scores with the default thresholds.
pub fn score(symptoms: SymptomSet) -> RiskAssessment {
    RiskScorer::default().score(symptoms)
}
