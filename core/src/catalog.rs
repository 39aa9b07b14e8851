//! Model Catalog
//!
//! Static profiles of the three candidate fake-news detectors. The table is
//! built once as a constant and never mutated; every shell reads it from here.

use serde::Serialize;
use std::fmt;

/// Candidate model identifier
///
/// Closed enumeration: the decision engine can only ever name one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelKind {
    LogisticRegression,
    NaiveBayes,
    #[serde(rename = "BERT")]
    Bert,
}

impl ModelKind {
    /// All models in fixed display order
    pub const ALL: [ModelKind; 3] = [
        ModelKind::LogisticRegression,
        ModelKind::NaiveBayes,
        ModelKind::Bert,
    ];

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::LogisticRegression => "Logistic Regression",
            ModelKind::NaiveBayes => "Naive Bayes",
            ModelKind::Bert => "BERT",
        }
    }

    /// Abbreviated name used as a comparison table column header
    pub fn column_label(self) -> &'static str {
        match self {
            ModelKind::LogisticRegression => "Logistic Reg",
            ModelKind::NaiveBayes => "Naive Bayes",
            ModelKind::Bert => "BERT",
        }
    }

    /// Catalog profile of this model
    pub fn profile(self) -> &'static ModelProfile {
        match self {
            ModelKind::LogisticRegression => &CATALOG[0],
            ModelKind::NaiveBayes => &CATALOG[1],
            ModelKind::Bert => &CATALOG[2],
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Compute class a model needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequiredHardware {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
}

impl fmt::Display for RequiredHardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredHardware::Cpu => f.write_str("CPU"),
            RequiredHardware::Gpu => f.write_str("GPU"),
        }
    }
}

/// Implementation complexity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    VerySimple,
    Simple,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::VerySimple => f.write_str("Very Simple"),
            Complexity::Simple => f.write_str("Simple"),
            Complexity::Complex => f.write_str("Complex"),
        }
    }
}

/// Immutable per-model record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProfile {
    /// Model identifier
    pub kind: ModelKind,
    /// Accuracy in percent (0-100)
    pub accuracy: u8,
    /// Milliseconds per prediction
    pub speed_ms: f64,
    /// Training time in minutes
    pub training_time_min: f64,
    /// Memory footprint in megabytes
    pub memory_mb: u32,
    /// Interpretability score (1-10)
    pub interpretability: u8,
    /// Hardware needed to train and serve the model
    pub required_hardware: RequiredHardware,
    /// Implementation complexity
    pub complexity: Complexity,
    /// Narrative strengths shown when the model is recommended
    pub strengths: &'static [&'static str],
    /// Narrative weaknesses shown when the model is recommended
    pub weaknesses: &'static [&'static str],
}

/// The catalog, in fixed display order
pub static CATALOG: [ModelProfile; 3] = [
    ModelProfile {
        kind: ModelKind::LogisticRegression,
        accuracy: 82,
        speed_ms: 0.5,
        training_time_min: 2.5,
        memory_mb: 50,
        interpretability: 9,
        required_hardware: RequiredHardware::Cpu,
        complexity: Complexity::Simple,
        strengths: &[
            "Good balance of accuracy and speed",
            "Easy to interpret results",
            "Works well with medium datasets",
        ],
        weaknesses: &["May miss complex patterns", "Needs feature engineering"],
    },
    ModelProfile {
        kind: ModelKind::NaiveBayes,
        accuracy: 78,
        speed_ms: 0.3,
        training_time_min: 1.0,
        memory_mb: 30,
        interpretability: 8,
        required_hardware: RequiredHardware::Cpu,
        complexity: Complexity::VerySimple,
        strengths: &[
            "Extremely fast training and prediction",
            "Works great with small datasets",
            "Very simple to implement",
        ],
        weaknesses: &[
            "Assumes word independence",
            "Lower accuracy than complex models",
        ],
    },
    ModelProfile {
        kind: ModelKind::Bert,
        accuracy: 94,
        speed_ms: 45.0,
        training_time_min: 180.0,
        memory_mb: 2048,
        interpretability: 3,
        required_hardware: RequiredHardware::Gpu,
        complexity: Complexity::Complex,
        strengths: &[
            "State-of-the-art accuracy",
            "Understands context and nuance",
            "Pre-trained on massive text data",
        ],
        weaknesses: &[
            "Very slow and resource-heavy",
            "Hard to interpret decisions",
            "Needs large datasets to shine",
        ],
    },
];

/// Profiles of every model except `chosen`, in catalog order
pub fn alternatives(chosen: ModelKind) -> impl Iterator<Item = &'static ModelProfile> {
    CATALOG.iter().filter(move |profile| profile.kind != chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_matches_kind() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn test_catalog_order_is_fixed() {
        let kinds: Vec<_> = CATALOG.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, ModelKind::ALL.to_vec());
    }

    #[test]
    fn test_catalog_value_ranges() {
        for profile in &CATALOG {
            assert!(profile.accuracy <= 100);
            assert!(profile.speed_ms > 0.0);
            assert!(profile.training_time_min > 0.0);
            assert!(profile.memory_mb > 0);
            assert!((1..=10).contains(&profile.interpretability));
            assert_eq!(profile.strengths.len(), 3);
            assert!(!profile.weaknesses.is_empty());
        }
    }

    #[test]
    fn test_bert_is_the_only_gpu_model() {
        let gpu: Vec<_> = CATALOG
            .iter()
            .filter(|p| p.required_hardware == RequiredHardware::Gpu)
            .map(|p| p.kind)
            .collect();
        assert_eq!(gpu, vec![ModelKind::Bert]);
    }

    #[test]
    fn test_alternatives_skip_chosen() {
        let names: Vec<_> = alternatives(ModelKind::NaiveBayes)
            .map(|p| p.kind.display_name())
            .collect();
        assert_eq!(names, vec!["Logistic Regression", "BERT"]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ModelKind::Bert.to_string(), "BERT");
        assert_eq!(Complexity::VerySimple.to_string(), "Very Simple");
        assert_eq!(RequiredHardware::Gpu.to_string(), "GPU");
    }
}
