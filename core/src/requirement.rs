//! User requirements
//!
//! The three answers a user gives before a recommendation is made. Each answer
//! is a closed enumeration; shells turn raw input into these values and fall
//! back to the documented default whenever the input is not recognised.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::{Error, Result};

/// Amount of labeled training data available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Dominant optimization goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Speed,
    #[default]
    Accuracy,
    Simplicity,
}

/// Compute class available for training and inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hardware {
    #[default]
    Cpu,
    Gpu,
}

/// A lettered answer to one wizard question
#[derive(Debug, Clone, Copy)]
pub struct Choice<T: 'static> {
    pub letter: char,
    pub label: &'static str,
    pub value: T,
}

/// Common behaviour of the three answer types
pub trait Answer: Copy + Default + FromStr<Err = Error> + fmt::Display + 'static {
    /// Field name used in forms, query strings and logs
    const FIELD: &'static str;

    /// Lettered choices in the order they are offered
    fn choices() -> &'static [Choice<Self>];

    /// Map a lettered choice (`a`, `b`, `c`) to a value
    fn from_letter(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let mut chars = input.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::choices()
            .iter()
            .find(|choice| choice.letter == letter)
            .map(|choice| choice.value)
    }

    /// Lettered choice, falling back to the default when unrecognised
    fn from_letter_or_default(input: &str) -> Self {
        Self::from_letter(input).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                field = Self::FIELD,
                input = input.trim(),
                "unrecognised choice, using default '{}'",
                fallback
            );
            fallback
        })
    }

    /// Parse a value name, falling back to the default when unrecognised
    fn parse_or_default(input: &str) -> Self {
        input.parse().unwrap_or_else(|e: Error| {
            let fallback = Self::default();
            warn!("{}, using default '{}'", e, fallback);
            fallback
        })
    }
}

impl Answer for DatasetSize {
    const FIELD: &'static str = "dataset_size";

    fn choices() -> &'static [Choice<Self>] {
        &[
            Choice {
                letter: 'a',
                label: "Small (< 10,000 articles)",
                value: DatasetSize::Small,
            },
            Choice {
                letter: 'b',
                label: "Medium (10,000 - 100,000 articles)",
                value: DatasetSize::Medium,
            },
            Choice {
                letter: 'c',
                label: "Large (> 100,000 articles)",
                value: DatasetSize::Large,
            },
        ]
    }
}

impl Answer for Priority {
    const FIELD: &'static str = "priority";

    fn choices() -> &'static [Choice<Self>] {
        &[
            Choice {
                letter: 'a',
                label: "Speed (fast predictions)",
                value: Priority::Speed,
            },
            Choice {
                letter: 'b',
                label: "Accuracy (best performance)",
                value: Priority::Accuracy,
            },
            Choice {
                letter: 'c',
                label: "Simplicity (easy to understand)",
                value: Priority::Simplicity,
            },
        ]
    }
}

impl Answer for Hardware {
    const FIELD: &'static str = "hardware";

    fn choices() -> &'static [Choice<Self>] {
        &[
            Choice {
                letter: 'a',
                label: "CPU only",
                value: Hardware::Cpu,
            },
            Choice {
                letter: 'b',
                label: "GPU available",
                value: Hardware::Gpu,
            },
        ]
    }
}

impl DatasetSize {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetSize::Small => "small",
            DatasetSize::Medium => "medium",
            DatasetSize::Large => "large",
        }
    }
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Speed => "speed",
            Priority::Accuracy => "accuracy",
            Priority::Simplicity => "simplicity",
        }
    }
}

impl Hardware {
    pub fn as_str(self) -> &'static str {
        match self {
            Hardware::Cpu => "cpu",
            Hardware::Gpu => "gpu",
        }
    }
}

macro_rules! impl_answer_text {
    ($ty:ty, [$($variant:expr),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let normalized = s.trim().to_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|v: &$ty| v.as_str() == normalized)
                    .ok_or_else(|| Error::InvalidChoice {
                        field: <$ty as Answer>::FIELD,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_answer_text!(DatasetSize, [DatasetSize::Small, DatasetSize::Medium, DatasetSize::Large]);
impl_answer_text!(Priority, [Priority::Speed, Priority::Accuracy, Priority::Simplicity]);
impl_answer_text!(Hardware, [Hardware::Cpu, Hardware::Gpu]);

/// The three constraints a recommendation is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UserRequirement {
    pub dataset_size: DatasetSize,
    pub priority: Priority,
    pub hardware: Hardware,
}

impl UserRequirement {
    pub fn new(dataset_size: DatasetSize, priority: Priority, hardware: Hardware) -> Self {
        Self {
            dataset_size,
            priority,
            hardware,
        }
    }

    /// Build from raw value names; missing or unknown values use the defaults
    pub fn from_raw(
        dataset_size: Option<&str>,
        priority: Option<&str>,
        hardware: Option<&str>,
    ) -> Self {
        Self {
            dataset_size: dataset_size.map(DatasetSize::parse_or_default).unwrap_or_default(),
            priority: priority.map(Priority::parse_or_default).unwrap_or_default(),
            hardware: hardware.map(Hardware::parse_or_default).unwrap_or_default(),
        }
    }

    /// Every combination of the three answers (3 x 3 x 2)
    pub fn all() -> Vec<UserRequirement> {
        let mut all = Vec::with_capacity(18);
        for size in DatasetSize::choices() {
            for priority in Priority::choices() {
                for hardware in Hardware::choices() {
                    all.push(Self::new(size.value, priority.value, hardware.value));
                }
            }
        }
        all
    }
}
