//! Interactive terminal wizard
//!
//! Asks the three questions with lettered choices, then prints the
//! recommendation, its caveats, the chosen model's narrative and the
//! alternatives. Generic over the input and output streams so it can run
//! against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};
use tracing::info;

use referee_core::comparison::render_table;
use referee_core::{decide, Answer, DatasetSize, Hardware, Priority, Recommendation, UserRequirement};

use crate::{render, Result};

pub struct Wizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the whole session and return what was recommended
    pub fn run(&mut self) -> Result<Recommendation> {
        writeln!(self.output, "🏆 ML Model Referee for Fake News Detection")?;
        writeln!(self.output, "   Helping you choose the right model for your needs!")?;
        write!(self.output, "{}", render_table())?;

        let requirement = self.ask_requirements()?;
        info!(
            dataset_size = %requirement.dataset_size,
            priority = %requirement.priority,
            hardware = %requirement.hardware,
            "Wizard answers collected"
        );

        render::requirements(&mut self.output, &requirement)?;

        let recommendation = decide(&requirement);
        render::recommendation(&mut self.output, &recommendation)?;
        render::model_details(&mut self.output, &recommendation)?;
        render::alternative_options(&mut self.output, &recommendation)?;

        writeln!(
            self.output,
            "\n💡 Pro Tip: Start with {} and experiment with others later!",
            recommendation.model
        )?;
        self.output.flush()?;

        Ok(recommendation)
    }

    /// Ask the three questions; unrecognised letters use the defaults
    pub fn ask_requirements(&mut self) -> Result<UserRequirement> {
        writeln!(
            self.output,
            "\n🎯 Let's find the best model for your fake news detection project!"
        )?;

        let dataset_size: DatasetSize = self.ask("1. How much training data do you have?")?;
        let priority: Priority = self.ask("2. What's most important to you?")?;
        let hardware: Hardware = self.ask("3. What hardware do you have?")?;

        Ok(UserRequirement::new(dataset_size, priority, hardware))
    }

    fn ask<T: Answer>(&mut self, question: &str) -> Result<T> {
        writeln!(self.output, "\n{question}")?;
        let choices = T::choices();
        for choice in choices {
            writeln!(self.output, "   {}) {}", choice.letter, choice.label)?;
        }

        let letters: Vec<String> = choices.iter().map(|c| c.letter.to_string()).collect();
        write!(self.output, "Enter choice ({}): ", letters.join("/"))?;
        self.output.flush()?;

        // End of input reads as an empty answer and takes the default;
        // bytes that are not UTF-8 fall through to the default as well
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;

        Ok(T::from_letter_or_default(&String::from_utf8_lossy(&line)))
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
