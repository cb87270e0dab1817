/// quick start - solve the default showroom quote
use car_finance_rs::LoanQuote;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let quote = LoanQuote::default();

    // headline figures, formatted in the quote currency
    println!("{}", quote.summary().to_json_pretty()?);

    // first few ledger rows
    for row in quote.results().schedule.iter().take(3) {
        println!(
            "month {:>2}  payment {:>10.2}  interest {:>8.2}  balance {:>12.2}",
            row.month, row.payment, row.interest, row.balance
        );
    }

    Ok(())
}
