//! Canned demo scenarios

use crate::requirement::{DatasetSize, Hardware, Priority, UserRequirement};

/// A named set of requirements replayed by the scripted demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: UserRequirement,
}

pub static SCENARIOS: [Scenario; 4] = [
    Scenario {
        name: "Startup Company",
        description: "Small team, limited resources, need quick deployment",
        requirement: UserRequirement {
            dataset_size: DatasetSize::Small,
            priority: Priority::Speed,
            hardware: Hardware::Cpu,
        },
    },
    Scenario {
        name: "Research Institution",
        description: "Academic research, need highest possible accuracy",
        requirement: UserRequirement {
            dataset_size: DatasetSize::Large,
            priority: Priority::Accuracy,
            hardware: Hardware::Gpu,
        },
    },
    Scenario {
        name: "News Website",
        description: "Real-time fact-checking for live articles",
        requirement: UserRequirement {
            dataset_size: DatasetSize::Medium,
            priority: Priority::Speed,
            hardware: Hardware::Cpu,
        },
    },
    Scenario {
        name: "Explainable AI System",
        description: "Need to explain decisions to end users",
        requirement: UserRequirement {
            dataset_size: DatasetSize::Medium,
            priority: Priority::Simplicity,
            hardware: Hardware::Gpu,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelKind;
    use crate::engine::decide;

    #[test]
    fn test_scenarios_route_through_engine() {
        let models: Vec<_> = SCENARIOS
            .iter()
            .map(|s| decide(&s.requirement).model)
            .collect();
        assert_eq!(
            models,
            vec![
                ModelKind::NaiveBayes,
                ModelKind::Bert,
                ModelKind::NaiveBayes,
                ModelKind::NaiveBayes
            ]
        );
    }

    #[test]
    fn test_scenario_names_unique() {
        let names: std::collections::HashSet<_> = SCENARIOS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), SCENARIOS.len());
    }
}
