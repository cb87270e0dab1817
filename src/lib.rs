pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod quote;
pub mod solver;
pub mod types;
pub mod views;

// re-export key types
pub use config::{LoanInputs, APR_PRESETS};
pub use currency::{format_currency, Currency};
pub use errors::{LoanError, Result};
pub use export::{export_schedule, schedule_to_csv, write_schedule_csv, EXPORT_FILE_NAME};
pub use quote::LoanQuote;
pub use solver::solve;
pub use types::{AmortizationRow, CalculationMode, DownPaymentMode, LoanResults};
pub use views::{
    balance_curve, composition_split, interest_markup, BalancePoint, CompositionSplit,
    SummaryView,
};
