//! Generation runs.
//!
//! A run builds a fresh [`VariableIndex`] and [`BoundaryIndex`], feeds every observation
//! to both in order, and hands back the populated indexes as a [`Report`].
//! Nothing is shared between runs.

use std::fmt;

use log::info;

use crate::boundary::BoundaryIndex;
use crate::extract::{extract_literals, ExtractError};
use crate::observation::Observation;
use crate::render::RenderConfig;
use crate::variables::VariableIndex;

#[derive(Debug, Clone, Default)]
pub struct Generator {
    pub config: RenderConfig,
}

impl Generator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Process all observations in order.
    pub fn run(&self, observations: &[Observation]) -> Report {
        let mut variables = VariableIndex::new();
        let mut boundaries = BoundaryIndex::new();

        for observation in observations {
            variables.record(observation);
            boundaries.record(observation);
        }

        info!(
            "Processed {} observations for {} variables",
            observations.len(),
            variables.len()
        );

        Report {
            config: self.config.clone(),
            observations: observations.to_vec(),
            variables,
            boundaries,
        }
    }

    /// Extract literal assignments from JavaScript source and process them.
    pub fn run_source(&self, source: &str) -> Result<Report, ExtractError> {
        let observations = extract_literals(source)?;
        Ok(self.run(&observations))
    }
}

/// Result of a single generation run.
#[derive(Debug, Clone)]
pub struct Report {
    config: RenderConfig,
    pub observations: Vec<Observation>,
    pub variables: VariableIndex,
    pub boundaries: BoundaryIndex,
}

impl Report {
    pub fn variables_trace(&self) -> String {
        self.variables.render_with_config(&self.config)
    }

    pub fn boundaries_trace(&self) -> String {
        self.boundaries.render_with_config(&self.config)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variables:")?;
        for observation in &self.observations {
            writeln!(f, "  {}", observation)?;
        }
        writeln!(f)?;
        writeln!(f, "Variable Index:")?;
        writeln!(f, "{}", self.variables_trace())?;
        writeln!(f)?;
        writeln!(f, "Generated Test Cases:")?;
        write!(f, "{}", self.boundaries_trace())
    }
}
