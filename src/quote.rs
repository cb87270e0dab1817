use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::LoanInputs;
use crate::errors::Result;
use crate::export;
use crate::solver::solve;
use crate::types::LoanResults;
use crate::views::SummaryView;

/// caller-side aggregate pairing the latest inputs with the latest results
///
/// results are recomputed eagerly on every edit; the solve is linear in the
/// term length, so there is nothing worth caching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    inputs: LoanInputs,
    results: LoanResults,
}

impl LoanQuote {
    /// create a quote and solve it
    pub fn new(inputs: LoanInputs) -> Self {
        let results = solve(&inputs);
        Self { inputs, results }
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    pub fn results(&self) -> &LoanResults {
        &self.results
    }

    /// edit the inputs and re-solve
    pub fn update<F>(&mut self, edit: F) -> &LoanResults
    where
        F: FnOnce(&mut LoanInputs),
    {
        edit(&mut self.inputs);
        self.results = solve(&self.inputs);
        &self.results
    }

    /// headline figures in the quote currency
    pub fn summary(&self) -> SummaryView {
        SummaryView::from_results(&self.results, &self.inputs.currency_code)
    }

    /// write the amortization ledger to `dir/amortization_schedule.csv`
    pub fn export_schedule(&self, dir: &Path) -> Result<PathBuf> {
        export::export_schedule(&self.results.schedule, dir)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for LoanQuote {
    fn default() -> Self {
        Self::new(LoanInputs::default())
    }
}
