use revkit_domain::contract::ContractInputs;
use revkit_domain::obligation::PerformanceObligation;
use serde_json::json;

#[test]
fn contract_inputs_use_camel_case_wire_names() {
    let inputs = ContractInputs::new(1000.0, 200.0, 1000.0);

    let value = serde_json::to_value(inputs).expect("contract serialize");
    assert_eq!(
        value,
        json!({
            "transactionPrice": 1000.0,
            "costsIncurred": 200.0,
            "totalEstimatedCosts": 1000.0
        })
    );
}

#[test]
fn contract_inputs_reject_unknown_fields() {
    let raw = json!({
        "transactionPrice": 1000.0,
        "costsIncurred": 200.0,
        "totalEstimatedCosts": 1000.0,
        "discountRate": 0.05
    });

    serde_json::from_value::<ContractInputs>(raw).expect_err("unknown field should be rejected");
}

#[test]
fn obligation_round_trips() {
    let obligation = PerformanceObligation::new("pob-installation");

    let raw = serde_json::to_string(&obligation).expect("obligation serialize");
    let back: PerformanceObligation = serde_json::from_str(&raw).expect("obligation deserialize");
    assert_eq!(back, obligation);
    assert_eq!(back.id, "pob-installation");
}
