/// serializable presentation views over loan results
use serde::{Deserialize, Serialize};

use crate::config::LoanInputs;
use crate::currency::format_currency;
use crate::types::{CalculationMode, LoanResults};

/// headline figures for the summary cards, formatted in the quote currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryView {
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_cost: String,
    pub principal_amount: String,
    pub residual_target: String,
    pub currency_code: String,
}

impl SummaryView {
    pub fn from_results(results: &LoanResults, currency_code: &str) -> Self {
        SummaryView {
            monthly_payment: format_currency(results.monthly_payment, currency_code),
            total_interest: format_currency(results.total_interest, currency_code),
            total_cost: format_currency(results.total_cost, currency_code),
            principal_amount: format_currency(results.principal_amount, currency_code),
            residual_target: format_currency(results.effective_balloon_amount, currency_code),
            currency_code: currency_code.to_string(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// principal versus interest split for the composition chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionSplit {
    pub principal: f64,
    pub total_interest: f64,
}

/// one point on the outstanding-balance curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub month: u32,
    pub balance: f64,
}

pub fn composition_split(results: &LoanResults) -> CompositionSplit {
    CompositionSplit {
        principal: results.principal_amount,
        total_interest: results.total_interest,
    }
}

pub fn balance_curve(results: &LoanResults) -> Vec<BalancePoint> {
    results
        .schedule
        .iter()
        .map(|row| BalancePoint {
            month: row.month,
            balance: row.balance,
        })
        .collect()
}

/// total amount repaid above the financed amount, as a fraction of it
///
/// the residual counts as repayment only in balloon mode, where it is a
/// committed target rather than a derived leftover; zero when nothing is
/// financed
pub fn interest_markup(inputs: &LoanInputs, monthly_payment: f64) -> f64 {
    if inputs.car_price <= inputs.down_payment {
        return 0.0;
    }

    let principal = inputs.car_price - inputs.down_payment;
    let residual = match inputs.calculation_mode {
        CalculationMode::Balloon => inputs.balloon_amount,
        CalculationMode::Installment => 0.0,
    };

    (monthly_payment * inputs.term_months as f64 + residual - principal) / principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_summary_view_formats_in_quote_currency() {
        let results = solve(&LoanInputs::default());
        let summary = SummaryView::from_results(&results, "SAR");

        assert!(summary.monthly_payment.ends_with('\u{FDFC}'));
        assert_eq!(summary.principal_amount, "100,475.00 \u{FDFC}");
        assert_eq!(summary.currency_code, "SAR");

        let json = summary.to_json_pretty().unwrap();
        assert!(json.contains("\"monthly_payment\""));
    }

    #[test]
    fn test_composition_split_mirrors_results() {
        let results = solve(&LoanInputs::default());
        let split = composition_split(&results);

        assert_eq!(split.principal, results.principal_amount);
        assert_eq!(split.total_interest, results.total_interest);
    }

    #[test]
    fn test_balance_curve_tracks_schedule() {
        let results = solve(&LoanInputs::default());
        let curve = balance_curve(&results);

        assert_eq!(curve.len(), results.schedule.len());
        assert_eq!(curve[0].month, 1);
        assert_eq!(curve[0].balance, results.schedule[0].balance);
    }

    #[test]
    fn test_interest_markup_default_quote() {
        let inputs = LoanInputs::default();
        let results = solve(&inputs);
        let markup = interest_markup(&inputs, results.monthly_payment);

        // 60 payments plus the residual, relative to 100,475 financed
        assert!((markup - 0.5296).abs() < 0.001);
    }

    #[test]
    fn test_interest_markup_zero_when_nothing_financed() {
        let inputs = LoanInputs::balloon_quote(10_000.0, 10_000.0, 5.0, 48, 0.0);
        assert_eq!(interest_markup(&inputs, 500.0), 0.0);
    }
}
