use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("{field} is not a finite number: {value}")]
    NonFiniteInput {
        field: &'static str,
        value: f64,
    },

    #[error("negative {field}: {value}")]
    NegativeInput {
        field: &'static str,
        value: f64,
    },

    #[error("down payment {down_payment} exceeds car price {car_price}")]
    DownPaymentExceedsPrice {
        down_payment: f64,
        car_price: f64,
    },

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
