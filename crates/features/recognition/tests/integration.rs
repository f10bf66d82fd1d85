use revkit_domain::obligation::PerformanceObligation;
use revkit_recognition::{RecognitionError, calculate_revenue_recognition};

fn obligations(count: usize) -> Vec<PerformanceObligation> {
    (0..count).map(|i| PerformanceObligation::new(format!("pob-{i}"))).collect()
}

#[test]
fn partial_completion_recognizes_proportional_revenue() {
    let outcome = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(2),
        &[1.0, 0.0],
    )
    .unwrap();

    assert!((outcome.revenue - 200.0).abs() < 1e-9);
    assert_eq!(outcome.schedule.len(), 2);

    let inception = outcome.schedule[0];
    assert_eq!(inception.period, 0);
    assert_eq!(inception.percentage_complete, 0.0);
    assert_eq!(inception.recognized_revenue, 0.0);

    let current = outcome.schedule[1];
    assert_eq!(current.period, 1);
    assert!((current.percentage_complete - 0.2).abs() < 1e-9);
    assert!((current.recognized_revenue - 200.0).abs() < 1e-9);
}

#[test]
fn cost_overrun_caps_recognition_at_the_transaction_price() {
    let outcome = calculate_revenue_recognition(
        1000.0,
        1500.0,
        1000.0,
        &[1000.0],
        &obligations(1),
        &[1.0],
    )
    .unwrap();

    assert_eq!(outcome.schedule[1].percentage_complete, 1.0);
    assert_eq!(outcome.revenue, 1000.0);
}

#[test]
fn empty_obligations_short_circuit_to_zero() {
    // Even a zero cost basis is fine here: the short-circuit runs before the
    // cost-basis guard.
    let outcome = calculate_revenue_recognition(1500.0, 300.0, 0.0, &[], &[], &[]).unwrap();

    assert!(outcome.schedule.is_empty());
    assert_eq!(outcome.revenue, 0.0);
}

#[test]
fn probability_sum_within_tolerance_is_accepted() {
    let outcome = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(2),
        &[1.0, 1e-8],
    );

    assert!(outcome.is_ok(), "sum of exactly 1 + 1e-8 must pass: {outcome:?}");
}

#[test]
fn probability_sum_past_tolerance_is_rejected() {
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(2),
        &[1.0, 1e-7],
    )
    .unwrap_err();

    assert!(matches!(err, RecognitionError::ProbabilitySumExceeded { .. }));
}

#[test]
fn over_summed_probabilities_are_rejected() {
    let err = calculate_revenue_recognition(
        1200.0,
        300.0,
        1200.0,
        &[600.0, 600.0],
        &obligations(2),
        &[0.7, 0.7],
    )
    .unwrap_err();

    assert!(matches!(err, RecognitionError::ProbabilitySumExceeded { .. }));
}

#[test]
fn zero_cost_basis_with_obligations_is_rejected() {
    for costs_incurred in [0.0, 300.0] {
        let err = calculate_revenue_recognition(
            1500.0,
            costs_incurred,
            0.0,
            &[750.0, 750.0],
            &obligations(2),
            &[1.0, 0.0],
        )
        .unwrap_err();

        assert!(matches!(err, RecognitionError::ZeroCostBasis { .. }));
    }
}

#[test]
fn negative_scalars_are_rejected() {
    let cases = [
        (-1000.0, 200.0, 1000.0),
        (1000.0, -200.0, 1000.0),
        (1000.0, 200.0, -1000.0),
    ];

    for (price, costs, estimate) in cases {
        let err = calculate_revenue_recognition(
            price,
            costs,
            estimate,
            &[500.0, 500.0],
            &obligations(2),
            &[1.0, 0.0],
        )
        .unwrap_err();

        assert!(matches!(err, RecognitionError::NegativeAmount { .. }));
    }
}

#[test]
fn negative_selling_price_is_rejected() {
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, -100.0],
        &obligations(2),
        &[1.0, 1.0],
    )
    .unwrap_err();

    // The per-element price scan runs before the probability budget, so the
    // over-summed [1.0, 1.0] pair never gets a say here.
    assert!(matches!(err, RecognitionError::NegativeSellingPrice { .. }));
}

#[test]
fn out_of_range_probabilities_are_rejected() {
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(2),
        &[1.2, -0.2],
    )
    .unwrap_err();

    assert!(matches!(err, RecognitionError::ProbabilityOutOfRange { .. }));
}

#[test]
fn price_and_probability_lengths_must_agree() {
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0],
        &obligations(2),
        &[1.0, 0.0],
    )
    .unwrap_err();

    assert!(matches!(err, RecognitionError::LengthMismatch { .. }));
}

#[test]
fn price_and_obligation_counts_must_agree() {
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(1),
        &[1.0, 0.0],
    )
    .unwrap_err();

    assert!(matches!(err, RecognitionError::LengthMismatch { .. }));
}

#[test]
fn first_failing_check_wins_on_multi_violating_input() {
    // Negative transaction price outranks the broken probability budget.
    let err = calculate_revenue_recognition(
        -1000.0,
        200.0,
        1000.0,
        &[500.0, 500.0],
        &obligations(2),
        &[0.7, 0.7],
    )
    .unwrap_err();
    assert!(matches!(err, RecognitionError::NegativeAmount { .. }));

    // The probability range scan outranks the negative price scan.
    let err = calculate_revenue_recognition(
        1000.0,
        200.0,
        1000.0,
        &[-500.0, 500.0],
        &obligations(2),
        &[1.5, 0.0],
    )
    .unwrap_err();
    assert!(matches!(err, RecognitionError::ProbabilityOutOfRange { .. }));
}

#[test]
fn identical_inputs_yield_identical_outcomes() {
    let run = || {
        calculate_revenue_recognition(
            1800.0,
            360.0,
            1800.0,
            &[900.0, 900.0],
            &obligations(2),
            &[0.4, 0.4],
        )
        .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn outcome_round_trips_through_json() {
    let outcome = calculate_revenue_recognition(
        2000.0,
        400.0,
        2000.0,
        &[1000.0, 1000.0],
        &obligations(2),
        &[0.5, 0.5],
    )
    .unwrap();

    let json = outcome.to_json().unwrap();
    assert!(json.contains("percentageComplete"), "wire names are camelCase: {json}");

    let back = revkit_recognition::RecognitionOutcome::from_json(&json).unwrap();
    assert_eq!(back, outcome);
}
