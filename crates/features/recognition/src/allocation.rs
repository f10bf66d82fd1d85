//! Transaction-price allocation across performance obligations.

/// Tolerance applied when testing the allocated total against the
/// transaction price, so that rounding noise does not trigger a rescale.
pub const ALLOCATION_CAP_TOLERANCE: f64 = 1e-8;

/// Prorates each standalone selling price by its realization probability and
/// caps the allocated total at the transaction price.
///
/// The proration is an expected-value adjustment for variable consideration:
/// a price only counts to the extent it is likely to be realized. When the
/// prorated total still exceeds the transaction price, every amount is scaled
/// by `transaction_price / total`; the contract's stated price is a hard
/// ceiling no matter how the obligation-level amounts sum.
///
/// Callers must have validated lengths and signs already.
// TODO: surface the per-obligation amounts as schedule rows; today only the
// two-point aggregate schedule leaves the engine, so this vector is dropped
// by the caller after the cap is applied.
pub(crate) fn allocate_transaction_price(
    transaction_price: f64,
    standalone_selling_prices: &[f64],
    probabilities: &[f64],
) -> Vec<f64> {
    let mut adjusted: Vec<f64> = standalone_selling_prices
        .iter()
        .zip(probabilities)
        .map(|(price, probability)| price * probability)
        .collect();

    let total_allocated: f64 = adjusted.iter().sum();
    if total_allocated > transaction_price + ALLOCATION_CAP_TOLERANCE {
        let scale = transaction_price / total_allocated;
        for amount in &mut adjusted {
            *amount *= scale;
        }
    }

    adjusted
}
