use crate::config::LoanInputs;
use crate::types::{AmortizationRow, CalculationMode, LoanResults};

/// solve a financing quote and amortize it month by month
///
/// supports two modes:
/// 1. balloon: derives the monthly payment from a fixed residual
/// 2. installment: derives the implied residual from a fixed payment
///
/// pure arithmetic over `f64`; degenerate inputs (zero term, runaway
/// rates) propagate ieee-754 special values instead of raising, and
/// callers reject non-finite results before display
pub fn solve(inputs: &LoanInputs) -> LoanResults {
    let principal = inputs.car_price - inputs.down_payment;
    let monthly_rate = (inputs.apr / 100.0) / 12.0;
    let n = inputs.term_months;

    let (payment, effective_balloon) = match inputs.calculation_mode {
        // residual fixed, solve for the payment
        CalculationMode::Balloon => {
            let balloon = inputs.balloon_amount;
            let payment = if monthly_rate == 0.0 {
                // straight line, no interest
                (principal - balloon) / n as f64
            } else {
                let growth = (1.0 + monthly_rate).powi(n as i32);
                (principal * monthly_rate * growth - balloon * monthly_rate) / (growth - 1.0)
            };
            (payment, balloon)
        }
        // payment fixed, solve for the implied residual
        CalculationMode::Installment => {
            let payment = inputs.target_monthly_payment;
            let balloon = if monthly_rate == 0.0 {
                principal - payment * n as f64
            } else {
                // FV = PV*(1+r)^n - PMT * ((1+r)^n - 1) / r
                let growth = (1.0 + monthly_rate).powi(n as i32);
                principal * growth - payment * (growth - 1.0) / monthly_rate
            };
            (payment, balloon)
        }
    };

    // display floor only; the payment above is never re-solved against it
    let effective_balloon = effective_balloon.max(0.0);

    let mut schedule = Vec::with_capacity(n as usize);
    let mut balance = principal;
    let mut total_interest = 0.0;

    for month in 1..=n {
        let interest = balance * monthly_rate;
        let principal_paid = payment - interest;

        balance -= principal_paid;
        total_interest += interest;

        schedule.push(AmortizationRow {
            month,
            payment,
            principal: principal_paid,
            interest,
            // interest keeps accruing on the carried balance; only the
            // emitted value is floored
            balance: balance.max(0.0),
        });
    }

    LoanResults {
        monthly_payment: payment,
        total_interest,
        total_cost: principal + total_interest + inputs.down_payment,
        principal_amount: principal,
        effective_balloon_amount: effective_balloon,
        schedule,
    }
}
