use std::collections::HashMap;
use std::fmt::Write as _;

use crate::core::engine::{Engine, EngineError};
use crate::core::roster::Roster;
use crate::models::AssignmentSet;

/// How often each giver drew each receiver over many runs
///
/// Rows are givers and columns receivers, both in name order. Because givers
/// late in a pass choose from a smaller pool, the counts are not uniform even
/// when no constraint applies; this matrix is how that shows up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasMatrix {
    names: Vec<String>,
    counts: Vec<Vec<u64>>,
    runs: u64,
}

impl BiasMatrix {
    pub fn new(roster: &Roster) -> Self {
        let mut names: Vec<String> = roster.participants().iter().map(|p| p.name.clone()).collect();
        names.sort();
        let n = names.len();

        Self {
            names,
            counts: vec![vec![0; n]; n],
            runs: 0,
        }
    }

    /// Run the engine `runs` times on `roster` and tally every pair
    pub fn collect(engine: &mut Engine, roster: &Roster, runs: u64) -> Result<Self, EngineError> {
        let mut matrix = Self::new(roster);

        for run in 0..runs {
            let draw = engine.run(roster)?;
            tracing::debug!("Bias run {} took {} attempt(s)", run + 1, draw.stats.attempts);
            matrix.record(&draw.assignments);
        }

        tracing::info!("Collected {} runs over {} participants", runs, matrix.names.len());
        Ok(matrix)
    }

    /// Add one draw to the tally; pairs naming unknown people are ignored
    pub fn record(&mut self, assignments: &AssignmentSet) {
        let index: HashMap<&str, usize> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        for a in assignments {
            if let (Some(&g), Some(&r)) = (
                index.get(a.giver.name.as_str()),
                index.get(a.receiver.name.as_str()),
            ) {
                self.counts[g][r] += 1;
            }
        }
        self.runs += 1;
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn count(&self, giver: &str, receiver: &str) -> Option<u64> {
        let g = self.names.iter().position(|n| n == giver)?;
        let r = self.names.iter().position(|n| n == receiver)?;
        Some(self.counts[g][r])
    }

    /// Render as CSV: a `Players` header row, then one row per giver
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = std::iter::once("Players".to_string())
            .chain(self.names.iter().map(|n| csv_field(n)))
            .collect();
        out.push_str(&header.join(","));
        out.push('\n');

        for (name, row) in self.names.iter().zip(&self.counts) {
            out.push_str(&csv_field(name));
            for count in row {
                let _ = write!(out, ",{}", count);
            }
            out.push('\n');
        }

        out
    }
}

/// Quote a field when it holds a comma, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
