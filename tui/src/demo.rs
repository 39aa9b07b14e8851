//! Scripted showcase demo
//!
//! Replays the canned scenarios as simulated question and answer transcripts.
//! Recommendations come from the shared engine.

use std::io::Write;
use tracing::info;

use referee_core::{decide, Recommendation, Scenario, SCENARIOS};

use crate::pacing::Pacer;
use crate::{render, Result};

pub struct Demo<W> {
    output: W,
    pacer: Pacer,
}

impl<W: Write> Demo<W> {
    pub fn new(output: W, pacer: Pacer) -> Self {
        Self { output, pacer }
    }

    /// Play every scenario and return the recommendations in order
    pub fn run(&mut self) -> Result<Vec<Recommendation>> {
        self.pacer.clear_screen(&mut self.output)?;
        self.header()?;

        self.pacer
            .type_line(&mut self.output, "🎯 Welcome to the ML Model Referee Demo!")?;
        self.pacer.type_line(
            &mut self.output,
            "   This tool helps choose the right ML model for fake news detection",
        )?;
        writeln!(self.output)?;
        self.pacer.intro_pause();

        let total = SCENARIOS.len();
        let mut recommendations = Vec::with_capacity(total);

        for (index, scenario) in SCENARIOS.iter().enumerate() {
            let number = index + 1;
            let rule = "=".repeat(60);
            writeln!(self.output, "\n{rule}")?;
            writeln!(self.output, "DEMO {number}/{total}")?;
            writeln!(self.output, "{rule}")?;

            recommendations.push(self.show_scenario(scenario)?);

            if number < total {
                let notice = next_scenario_notice(self.pacer.settings().scenario_pause_ms);
                writeln!(self.output, "{notice}")?;
                self.output.flush()?;
                self.pacer.scenario_pause();
                self.pacer.clear_screen(&mut self.output)?;
                self.header()?;
            }
        }

        self.summary()?;
        self.output.flush()?;
        Ok(recommendations)
    }

    /// One transcript: questions, typed answers, analysis, banner
    pub fn show_scenario(&mut self, scenario: &Scenario) -> Result<Recommendation> {
        info!(scenario = scenario.name, "Playing demo scenario");
        let requirement = &scenario.requirement;

        writeln!(self.output, "🎬 SCENARIO: {}", scenario.name)?;
        writeln!(self.output, "📝 Context: {}", scenario.description)?;
        writeln!(self.output)?;

        writeln!(self.output, "❓ Question 1: How much training data do you have?")?;
        self.pacer.type_line(
            &mut self.output,
            &format!(
                "   ✅ Answer: {} dataset",
                title_case(requirement.dataset_size.as_str())
            ),
        )?;
        writeln!(self.output)?;

        writeln!(self.output, "❓ Question 2: What's most important to you?")?;
        self.pacer.type_line(
            &mut self.output,
            &format!(
                "   ✅ Answer: {} is the priority",
                title_case(requirement.priority.as_str())
            ),
        )?;
        writeln!(self.output)?;

        writeln!(self.output, "❓ Question 3: What hardware do you have available?")?;
        self.pacer.type_line(
            &mut self.output,
            &format!(
                "   ✅ Answer: {} available",
                requirement.hardware.as_str().to_uppercase()
            ),
        )?;
        writeln!(self.output)?;

        write!(self.output, "🤔 Analyzing requirements")?;
        self.pacer.thinking_dots(&mut self.output)?;
        writeln!(self.output, " Done! ✅")?;
        writeln!(self.output)?;

        let recommendation = decide(requirement);
        render::result_banner(&mut self.output, &recommendation)?;
        self.output.flush()?;
        self.pacer.result_pause();

        Ok(recommendation)
    }

    fn header(&mut self) -> Result<()> {
        let rule = "=".repeat(58);
        writeln!(self.output, "🏆{rule}🏆")?;
        writeln!(
            self.output,
            "🎯        ML MODEL REFEREE - FAKE NEWS DETECTION        🎯"
        )?;
        writeln!(self.output, "🏆{rule}🏆")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        let stars = "🌟".repeat(20);
        writeln!(self.output, "\n{stars}")?;
        writeln!(self.output, "🎊 DEMO COMPLETE! 🎊")?;
        writeln!(self.output, "{stars}")?;
        writeln!(self.output)?;
        writeln!(self.output, "📊 What we showed:")?;
        writeln!(self.output, "   ✅ Interactive questionnaire (3 simple questions)")?;
        writeln!(self.output, "   ✅ Smart recommendation engine")?;
        writeln!(self.output, "   ✅ Multiple real-world scenarios")?;
        writeln!(self.output, "   ✅ Detailed model comparisons")?;
        writeln!(self.output)?;
        writeln!(self.output, "🚀 Key Features:")?;
        writeln!(self.output, "   • No single 'best' model - shows trade-offs")?;
        writeln!(
            self.output,
            "   • Considers user constraints (data, hardware, priorities)"
        )?;
        writeln!(self.output, "   • Explains reasoning behind recommendations")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "🌐 Try the interactive web version with: model-referee web"
        )?;
        writeln!(self.output, "💻 Or run: model-referee wizard for the terminal version")?;
        Ok(())
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn next_scenario_notice(pause_ms: u64) -> String {
    if pause_ms == 0 {
        return "⏭️  Next scenario...".to_string();
    }
    let seconds = pause_ms as f64 / 1000.0;
    let unit = if pause_ms == 1000 { "second" } else { "seconds" };
    format!("⏭️  Next scenario in {seconds} {unit}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::ModelKind;

    fn run_demo() -> (Vec<Recommendation>, String) {
        let mut demo = Demo::new(Vec::new(), Pacer::instant());
        let recommendations = demo.run().unwrap();
        (recommendations, String::from_utf8(demo.into_output()).unwrap())
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("small"), "Small");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_next_scenario_notice_follows_pause() {
        assert_eq!(next_scenario_notice(3000), "⏭️  Next scenario in 3 seconds...");
        assert_eq!(next_scenario_notice(1500), "⏭️  Next scenario in 1.5 seconds...");
        assert_eq!(next_scenario_notice(1000), "⏭️  Next scenario in 1 second...");
        assert_eq!(next_scenario_notice(0), "⏭️  Next scenario...");
    }

    #[test]
    fn test_instant_demo_does_not_announce_a_wait() {
        let (_, output) = run_demo();
        assert!(!output.contains("seconds"));
        assert_eq!(output.matches("⏭️  Next scenario...").count(), 3);
    }

    #[test]
    fn test_demo_plays_all_scenarios() {
        let (recommendations, output) = run_demo();
        let models: Vec<_> = recommendations.iter().map(|r| r.model).collect();
        assert_eq!(
            models,
            vec![
                ModelKind::NaiveBayes,
                ModelKind::Bert,
                ModelKind::NaiveBayes,
                ModelKind::NaiveBayes
            ]
        );
        for n in 1..=4 {
            assert!(output.contains(&format!("DEMO {n}/4")));
        }
        assert_eq!(output.matches("⏭️  Next scenario").count(), 3);
        assert!(output.contains("🎊 DEMO COMPLETE! 🎊"));
    }

    #[test]
    fn test_transcript_answers() {
        let (_, output) = run_demo();
        assert!(output.contains("🎬 SCENARIO: Startup Company"));
        assert!(output.contains("   ✅ Answer: Small dataset"));
        assert!(output.contains("   ✅ Answer: Speed is the priority"));
        assert!(output.contains("   ✅ Answer: CPU available"));
        assert!(output.contains("🤔 Analyzing requirements... Done! ✅"));
        assert!(output.contains("🏆 RECOMMENDATION: BERT"));
        assert!(output.contains("📝 REASON: Highest accuracy with sufficient data"));
        assert!(output.contains("📝 REASON: Easiest to implement and debug"));
    }

    #[test]
    fn test_instant_demo_does_not_clear_screen() {
        let (_, output) = run_demo();
        assert!(!output.contains('\x1b'));
    }
}
