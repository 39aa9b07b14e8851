//! API Models Module
//!
//! Request types accepted by the web shell.

use serde::Deserialize;

use referee_core::UserRequirement;

/// Query string submitted by the questionnaire form
///
/// Every field is optional text so that a hand-edited URL never fails to
/// extract; normalization to the defaults happens in [`RecommendQuery::requirement`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RecommendQuery {
    pub dataset_size: Option<String>,
    pub priority: Option<String>,
    pub hardware: Option<String>,
}

impl RecommendQuery {
    /// Build from raw query pairs, keeping the first value of each field
    ///
    /// Repeated and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "dataset_size" => &mut query.dataset_size,
                "priority" => &mut query.priority,
                "hardware" => &mut query.hardware,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// True when the form has been submitted with at least one answer
    pub fn is_submitted(&self) -> bool {
        self.dataset_size.is_some() || self.priority.is_some() || self.hardware.is_some()
    }

    /// Normalized requirement, or `None` when nothing was submitted
    pub fn requirement(&self) -> Option<UserRequirement> {
        self.is_submitted().then(|| {
            UserRequirement::from_raw(
                self.dataset_size.as_deref(),
                self.priority.as_deref(),
                self.hardware.as_deref(),
            )
        })
    }
}
