/// fixed budget - derive the implied residual from a monthly payment cap
use car_finance_rs::{interest_markup, solve, LoanInputs};

fn main() {
    // 95,000 car, 20,000 down, 9.5% apr over 48 months, 1,600/month budget
    let inputs = LoanInputs::installment_quote(95_000.0, 20_000.0, 9.5, 48, 1_600.0);

    if inputs.validate().is_err() {
        eprintln!("rejecting quote before solving");
        return;
    }

    let results = solve(&inputs);
    if !results.is_finite() {
        eprintln!("inputs produced a degenerate schedule");
        return;
    }

    println!("financed amount:   {:.2}", results.principal_amount);
    println!("implied residual:  {:.2}", results.effective_balloon_amount);
    println!("total interest:    {:.2}", results.total_interest);
    println!("total cost:        {:.2}", results.total_cost);
    println!(
        "interest markup:   {:.1}%",
        interest_markup(&inputs, results.monthly_payment) * 100.0
    );
}
