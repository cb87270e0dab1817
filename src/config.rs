use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::types::{CalculationMode, DownPaymentMode};

/// apr quick-pick values offered by the input form
pub const APR_PRESETS: [f64; 4] = [5.0, 11.0, 15.0, 20.0];

/// caller-owned loan parameters, immutable per calculation
///
/// `down_payment` and `down_payment_percent` are two views of the same
/// quantity; the reconciliation setters keep them consistent. the solver
/// reads neither `down_payment_percent`, `down_payment_mode` nor
/// `currency_code` - those exist for the editing surface only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// gross asset price
    pub car_price: f64,
    pub down_payment: f64,
    pub down_payment_percent: f64,
    pub down_payment_mode: DownPaymentMode,
    pub calculation_mode: CalculationMode,
    /// fixed payment, read only in installment mode
    pub target_monthly_payment: f64,
    /// nominal annual rate in percent units (11 means 11%)
    pub apr: f64,
    pub term_months: u32,
    /// target residual value, read only in balloon mode
    pub balloon_amount: f64,
    /// display tag, no numeric effect
    pub currency_code: String,
}

impl Default for LoanInputs {
    /// showroom default quote
    fn default() -> Self {
        Self {
            car_price: 150_000.0,
            down_payment: 49_525.0,
            down_payment_percent: 33.01,
            down_payment_mode: DownPaymentMode::Amount,
            calculation_mode: CalculationMode::Balloon,
            target_monthly_payment: 2_113.10,
            apr: 11.0,
            term_months: 60,
            balloon_amount: 92_128.22,
            currency_code: "SAR".to_string(),
        }
    }
}

impl LoanInputs {
    /// fixed-balloon quote: residual known, payment solved
    pub fn balloon_quote(
        car_price: f64,
        down_payment: f64,
        apr: f64,
        term_months: u32,
        balloon_amount: f64,
    ) -> Self {
        Self {
            car_price,
            down_payment,
            down_payment_percent: percent_of(down_payment, car_price),
            down_payment_mode: DownPaymentMode::Amount,
            calculation_mode: CalculationMode::Balloon,
            target_monthly_payment: 0.0,
            apr,
            term_months,
            balloon_amount,
            currency_code: "SAR".to_string(),
        }
    }

    /// fixed-budget quote: payment known, residual solved
    pub fn installment_quote(
        car_price: f64,
        down_payment: f64,
        apr: f64,
        term_months: u32,
        target_monthly_payment: f64,
    ) -> Self {
        Self {
            car_price,
            down_payment,
            down_payment_percent: percent_of(down_payment, car_price),
            down_payment_mode: DownPaymentMode::Amount,
            calculation_mode: CalculationMode::Installment,
            target_monthly_payment,
            apr,
            term_months,
            balloon_amount: 0.0,
            currency_code: "SAR".to_string(),
        }
    }

    /// financed amount
    pub fn principal(&self) -> f64 {
        self.car_price - self.down_payment
    }

    /// change the vehicle price, carrying the authoritative down payment view
    pub fn set_car_price(&mut self, price: f64) {
        self.car_price = price;
        match self.down_payment_mode {
            DownPaymentMode::Percentage => {
                self.down_payment = price * self.down_payment_percent / 100.0;
            }
            DownPaymentMode::Amount => {
                self.down_payment_percent = percent_of(self.down_payment, price);
            }
        }
    }

    /// change the down payment amount and recompute the percent view
    pub fn set_down_payment(&mut self, amount: f64) {
        self.down_payment = amount;
        self.down_payment_percent = percent_of(amount, self.car_price);
    }

    /// change the down payment percent and recompute the amount view
    pub fn set_down_payment_percent(&mut self, percent: f64) {
        self.down_payment_percent = percent;
        self.down_payment = self.car_price * percent / 100.0;
    }

    /// caller-side guardrails
    ///
    /// `solve` never validates; callers that cannot render non-finite or
    /// nonsensical results invoke this before solving
    pub fn validate(&self) -> Result<()> {
        if self.term_months == 0 {
            return Err(LoanError::InvalidTerm {
                months: self.term_months,
            });
        }

        let fields = [
            ("car_price", self.car_price),
            ("down_payment", self.down_payment),
            ("apr", self.apr),
            ("balloon_amount", self.balloon_amount),
            ("target_monthly_payment", self.target_monthly_payment),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LoanError::NonFiniteInput { field, value });
            }
            if value < 0.0 {
                return Err(LoanError::NegativeInput { field, value });
            }
        }

        if self.down_payment > self.car_price {
            return Err(LoanError::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                car_price: self.car_price,
            });
        }

        Ok(())
    }
}

fn percent_of(amount: f64, total: f64) -> f64 {
    if total > 0.0 {
        amount / total * 100.0
    } else {
        0.0
    }
}
