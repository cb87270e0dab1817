/// csv export - write the amortization ledger to disk
use car_finance_rs::{LoanInputs, LoanQuote};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let quote = LoanQuote::new(LoanInputs::balloon_quote(
        150_000.0, 49_525.0, 11.0, 60, 92_128.22,
    ));

    let path = quote.export_schedule(&std::env::temp_dir())?;
    println!("ledger written to {}", path.display());

    let contents = std::fs::read_to_string(&path)?;
    for line in contents.lines().take(4) {
        println!("{}", line);
    }

    Ok(())
}
