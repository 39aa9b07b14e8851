//! Text blocks shared by the wizard and the demo

use std::io::Write;

use referee_core::catalog::alternatives;
use referee_core::{Recommendation, UserRequirement};

use crate::Result;

pub fn requirements<W: Write>(out: &mut W, requirement: &UserRequirement) -> Result<()> {
    writeln!(out, "\n🤔 Your Requirements:")?;
    writeln!(out, "   Dataset Size: {}", requirement.dataset_size)?;
    writeln!(out, "   Priority: {}", requirement.priority)?;
    writeln!(
        out,
        "   Hardware: {}",
        requirement.hardware.as_str().to_uppercase()
    )?;
    Ok(())
}

/// Recommendation, reason and any caveats
pub fn recommendation<W: Write>(out: &mut W, recommendation: &Recommendation) -> Result<()> {
    writeln!(out, "\n🎉 RECOMMENDATION: {}", recommendation.model)?;
    writeln!(out, "   Reason: {}", recommendation.reason)?;

    if !recommendation.caveats.is_empty() {
        writeln!(out, "\n⚠️  Important Notes:")?;
        for caveat in &recommendation.caveats {
            writeln!(out, "   ⚠️  {}", caveat)?;
        }
    }
    Ok(())
}

/// Catalog details plus strengths and weaknesses of the chosen model
pub fn model_details<W: Write>(out: &mut W, recommendation: &Recommendation) -> Result<()> {
    let profile = recommendation.profile();

    writeln!(out, "\n📊 {} Details:", profile.kind)?;
    writeln!(out, "   Accuracy: {}%", profile.accuracy)?;
    writeln!(out, "   Speed: {}ms per prediction", profile.speed_ms)?;
    writeln!(out, "   Training: {} minutes", profile.training_time_min)?;
    writeln!(out, "   Memory: {}MB", profile.memory_mb)?;
    writeln!(out, "   Interpretability: {}/10", profile.interpretability)?;
    writeln!(out, "   Hardware: {} required", profile.required_hardware)?;

    writeln!(out, "\n✅ Strengths:")?;
    for strength in profile.strengths {
        writeln!(out, "   • {}", strength)?;
    }

    writeln!(out, "\n❌ Weaknesses:")?;
    for weakness in profile.weaknesses {
        writeln!(out, "   • {}", weakness)?;
    }
    Ok(())
}

/// The two models that were not chosen
pub fn alternative_options<W: Write>(out: &mut W, recommendation: &Recommendation) -> Result<()> {
    writeln!(out, "\n🔄 Alternative Options:")?;
    for profile in alternatives(recommendation.model) {
        writeln!(
            out,
            "   • {}: {}% accuracy, {}ms speed",
            profile.kind, profile.accuracy, profile.speed_ms
        )?;
    }
    Ok(())
}

/// Banner used by the scripted demo
pub fn result_banner<W: Write>(out: &mut W, recommendation: &Recommendation) -> Result<()> {
    let rule = format!("🎉{}🎉", "=".repeat(50));
    writeln!(out, "{rule}")?;
    writeln!(out, "🏆 RECOMMENDATION: {}", recommendation.model)?;
    writeln!(out, "📝 REASON: {}", recommendation.reason)?;
    for caveat in &recommendation.caveats {
        writeln!(out, "⚠️  {}", caveat)?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::{decide, DatasetSize, Hardware, Priority};

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_details_for_naive_bayes() {
        let rec = decide(&UserRequirement::new(
            DatasetSize::Small,
            Priority::Speed,
            Hardware::Cpu,
        ));
        let text = rendered(|out| model_details(out, &rec));
        assert!(text.contains("📊 Naive Bayes Details:"));
        assert!(text.contains("Accuracy: 78%"));
        assert!(text.contains("Speed: 0.3ms per prediction"));
        assert!(text.contains("Hardware: CPU required"));
        assert_eq!(text.matches("   • ").count(), 5);
    }

    #[test]
    fn test_alternatives_exclude_choice() {
        let rec = decide(&UserRequirement::new(
            DatasetSize::Large,
            Priority::Accuracy,
            Hardware::Gpu,
        ));
        let text = rendered(|out| alternative_options(out, &rec));
        assert!(text.contains("Logistic Regression: 82% accuracy, 0.5ms speed"));
        assert!(text.contains("Naive Bayes: 78% accuracy, 0.3ms speed"));
        assert!(!text.contains("BERT:"));
    }

    #[test]
    fn test_recommendation_without_caveats_has_no_notes() {
        let rec = decide(&UserRequirement::default());
        let text = rendered(|out| recommendation(out, &rec));
        assert!(text.contains("RECOMMENDATION: Logistic Regression"));
        assert!(!text.contains("Important Notes"));
    }

    #[test]
    fn test_requirements_echo() {
        let text = rendered(|out| requirements(out, &UserRequirement::default()));
        assert!(text.contains("Dataset Size: medium"));
        assert!(text.contains("Priority: accuracy"));
        assert!(text.contains("Hardware: CPU"));
    }
}
