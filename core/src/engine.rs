//! Recommendation Engine
//!
//! One pure function over the closed set of requirements. Every shell calls
//! [`decide`]; nothing else in the workspace encodes the rule table.

use serde::Serialize;
use std::fmt;

use crate::catalog::{ModelKind, ModelProfile};
use crate::requirement::{DatasetSize, Hardware, Priority, UserRequirement};

/// Warning attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caveat {
    /// BERT chosen with a small dataset
    OverfitOnSmallData,
    /// BERT chosen while speed is the priority
    SlowerThanAlternatives,
    /// BERT chosen on CPU-only hardware.
    ///
    /// The decision table never picks BERT without a GPU, so this caveat is
    /// currently unreachable through [`decide`]. It stays in the rule list so
    /// that a change to the table cannot silently drop the warning.
    SlowOnCpu,
}

impl Caveat {
    pub fn message(self) -> &'static str {
        match self {
            Caveat::OverfitOnSmallData => "BERT may overfit on small datasets",
            Caveat::SlowerThanAlternatives => "BERT is much slower than alternatives",
            Caveat::SlowOnCpu => "BERT will be very slow on CPU",
        }
    }
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Engine output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub model: ModelKind,
    pub reason: &'static str,
    pub caveats: Vec<Caveat>,
}

impl Recommendation {
    /// Catalog profile of the recommended model
    pub fn profile(&self) -> &'static ModelProfile {
        self.model.profile()
    }
}

/// Pick a model for the given requirements
pub fn decide(requirement: &UserRequirement) -> Recommendation {
    let (model, reason) = primary_choice(requirement);
    let caveats = caveats_for(requirement, model);

    tracing::debug!(
        dataset_size = %requirement.dataset_size,
        priority = %requirement.priority,
        hardware = %requirement.hardware,
        model = %model,
        caveats = caveats.len(),
        "recommendation decided"
    );

    Recommendation {
        model,
        reason,
        caveats,
    }
}

fn primary_choice(requirement: &UserRequirement) -> (ModelKind, &'static str) {
    use ModelKind::*;

    match (requirement.hardware, requirement.priority) {
        (Hardware::Cpu, Priority::Accuracy) => (LogisticRegression, "Best CPU-only accuracy option"),
        (Hardware::Cpu, Priority::Speed) => (NaiveBayes, "Fastest inference on CPU"),
        (Hardware::Cpu, Priority::Simplicity) => {
            (NaiveBayes, "Simplest to implement and understand")
        }
        (Hardware::Gpu, Priority::Accuracy) => match requirement.dataset_size {
            DatasetSize::Large => (Bert, "Highest accuracy with sufficient data"),
            _ => (
                LogisticRegression,
                "Good accuracy without needing large dataset",
            ),
        },
        (Hardware::Gpu, Priority::Speed) => match requirement.dataset_size {
            DatasetSize::Small => (NaiveBayes, "Fastest option, works well with small data"),
            _ => (LogisticRegression, "Good balance of speed and performance"),
        },
        (Hardware::Gpu, Priority::Simplicity) => (NaiveBayes, "Easiest to implement and debug"),
    }
}

/// Caveats for `model` under `requirement`, in rule order
pub fn caveats_for(requirement: &UserRequirement, model: ModelKind) -> Vec<Caveat> {
    let mut caveats = Vec::new();

    if requirement.dataset_size == DatasetSize::Small && model == ModelKind::Bert {
        caveats.push(Caveat::OverfitOnSmallData);
    }
    if requirement.priority == Priority::Speed && model == ModelKind::Bert {
        caveats.push(Caveat::SlowerThanAlternatives);
    }
    if requirement.hardware == Hardware::Cpu && model == ModelKind::Bert {
        caveats.push(Caveat::SlowOnCpu);
    }

    caveats
}
