use serde::{Deserialize, Serialize};

/// which down payment field is authoritative for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownPaymentMode {
    /// absolute amount drives, percent follows
    Amount,
    /// percent drives, amount follows
    Percentage,
}

/// which quantity the solver derives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// residual is fixed, solve for the monthly payment
    Balloon,
    /// monthly payment is fixed, solve for the implied residual
    Installment,
}

/// one period of the amortization ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period index
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// end-of-period balance, floored at zero for display
    pub balance: f64,
}

/// solver output, recomputed fresh for every input change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResults {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
    pub principal_amount: f64,
    pub effective_balloon_amount: f64,
    pub schedule: Vec<AmortizationRow>,
}

impl LoanResults {
    /// true when every headline figure is a usable number
    ///
    /// degenerate inputs (zero term, runaway rates) surface as non-finite
    /// values here instead of errors; presentation callers check this
    /// before rendering
    pub fn is_finite(&self) -> bool {
        self.monthly_payment.is_finite()
            && self.total_interest.is_finite()
            && self.total_cost.is_finite()
            && self.principal_amount.is_finite()
            && self.effective_balloon_amount.is_finite()
    }

    /// displayed balance after the last period
    pub fn final_balance(&self) -> Option<f64> {
        self.schedule.last().map(|row| row.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&CalculationMode::Balloon).unwrap(),
            "\"balloon\""
        );
        assert_eq!(
            serde_json::to_string(&DownPaymentMode::Percentage).unwrap(),
            "\"percentage\""
        );

        let mode: CalculationMode = serde_json::from_str("\"installment\"").unwrap();
        assert_eq!(mode, CalculationMode::Installment);
    }

    #[test]
    fn test_is_finite_guard() {
        let mut results = LoanResults {
            monthly_payment: 100.0,
            total_interest: 0.0,
            total_cost: 1000.0,
            principal_amount: 1000.0,
            effective_balloon_amount: 0.0,
            schedule: Vec::new(),
        };
        assert!(results.is_finite());

        results.monthly_payment = f64::INFINITY;
        assert!(!results.is_finite());

        results.monthly_payment = f64::NAN;
        assert!(!results.is_finite());
    }

    #[test]
    fn test_final_balance() {
        let row = AmortizationRow {
            month: 1,
            payment: 100.0,
            principal: 90.0,
            interest: 10.0,
            balance: 910.0,
        };
        let results = LoanResults {
            monthly_payment: 100.0,
            total_interest: 10.0,
            total_cost: 1010.0,
            principal_amount: 1000.0,
            effective_balloon_amount: 0.0,
            schedule: vec![row],
        };

        assert_eq!(results.final_balance(), Some(910.0));
    }
}
