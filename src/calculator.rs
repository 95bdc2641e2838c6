use crate::schema::{
    api::Quote,
    upstream::{Mortgage, ServiceCodes},
};

pub const DEDUCTIBLE_VALUE: f64 = 5000.0;
pub const INSURED_VALUE: f64 = 695000.0;

/// Prices an insurance quote for `mortgage`.
///
/// Pricing is not implemented yet: every mortgage gets the same deductible
/// and insured value, and the service codes are ignored.
pub fn calculate(mortgage: &Mortgage, _service_codes: &ServiceCodes) -> Quote {
    Quote {
        mort_id: mortgage.mortgage_id.clone(),
        deductible_value: DEDUCTIBLE_VALUE,
        insured_value: INSURED_VALUE,
        client_name: None,
    }
}
