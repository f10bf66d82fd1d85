use proptest::prelude::*;
use revkit_domain::obligation::PerformanceObligation;
use revkit_recognition::calculate_revenue_recognition;

fn obligations(count: usize) -> Vec<PerformanceObligation> {
    (0..count).map(|i| PerformanceObligation::new(format!("pob-{i}"))).collect()
}

/// Per-obligation price/weight pairs; dividing each weight by the sequence
/// length keeps the probability sum strictly below one.
fn valid_obligation_set() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    proptest::collection::vec((0.0f64..50_000.0, 0.0f64..1.0), 1..12).prop_map(|pairs| {
        let len = pairs.len() as f64;
        let prices = pairs.iter().map(|(price, _)| *price).collect();
        let probabilities = pairs.iter().map(|(_, weight)| weight / len).collect();
        (prices, probabilities)
    })
}

proptest! {
    #[test]
    fn revenue_never_leaves_the_transaction_price_range(
        transaction_price in 0.0f64..1_000_000.0,
        costs_incurred in 0.0f64..2_000_000.0,
        total_estimated_costs in 1.0f64..1_000_000.0,
        (prices, probabilities) in valid_obligation_set(),
    ) {
        let outcome = calculate_revenue_recognition(
            transaction_price,
            costs_incurred,
            total_estimated_costs,
            &prices,
            &obligations(prices.len()),
            &probabilities,
        )
        .unwrap();

        prop_assert!(outcome.revenue >= 0.0);
        prop_assert!(outcome.revenue <= transaction_price);
    }

    #[test]
    fn schedule_always_opens_at_zero_and_closes_consistently(
        transaction_price in 0.0f64..1_000_000.0,
        costs_incurred in 0.0f64..2_000_000.0,
        total_estimated_costs in 1.0f64..1_000_000.0,
        (prices, probabilities) in valid_obligation_set(),
    ) {
        let outcome = calculate_revenue_recognition(
            transaction_price,
            costs_incurred,
            total_estimated_costs,
            &prices,
            &obligations(prices.len()),
            &probabilities,
        )
        .unwrap();

        prop_assert_eq!(outcome.schedule.len(), 2);

        let inception = outcome.schedule[0];
        prop_assert_eq!(inception.period, 0);
        prop_assert_eq!(inception.percentage_complete, 0.0);
        prop_assert_eq!(inception.recognized_revenue, 0.0);

        let current = outcome.schedule[1];
        prop_assert_eq!(current.period, 1);
        prop_assert!((0.0..=1.0).contains(&current.percentage_complete));
        prop_assert_eq!(
            current.recognized_revenue,
            transaction_price * current.percentage_complete
        );
        prop_assert_eq!(current.recognized_revenue, outcome.revenue);
    }

    #[test]
    fn calculation_is_idempotent(
        transaction_price in 0.0f64..1_000_000.0,
        costs_incurred in 0.0f64..2_000_000.0,
        total_estimated_costs in 1.0f64..1_000_000.0,
        (prices, probabilities) in valid_obligation_set(),
    ) {
        let run = || calculate_revenue_recognition(
            transaction_price,
            costs_incurred,
            total_estimated_costs,
            &prices,
            &obligations(prices.len()),
            &probabilities,
        )
        .unwrap();

        prop_assert_eq!(run(), run());
    }

    #[test]
    fn any_negative_scalar_is_rejected(
        magnitude in 1e-6f64..1_000_000.0,
        slot in 0usize..3,
        (prices, probabilities) in valid_obligation_set(),
    ) {
        let mut scalars = [1000.0, 200.0, 1000.0];
        scalars[slot] = -magnitude;

        let result = calculate_revenue_recognition(
            scalars[0],
            scalars[1],
            scalars[2],
            &prices,
            &obligations(prices.len()),
            &probabilities,
        );

        prop_assert!(result.is_err());
    }
}
