use super::*;

#[test]
fn list_payload_decodes_per_key() {
    let body = r#"[{"id":"1","name":"Fintech"}]"#;
    let payload = ListPayload::decode(ListKey::Industries, body).expect("industries");
    assert_eq!(payload.key(), ListKey::Industries);
    match payload {
        ListPayload::Industries(items) => assert_eq!(items[0].name, "Fintech"),
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn list_payload_rejects_wrong_shape() {
    assert!(ListPayload::decode(ListKey::Companies, r#"[{"id":"1","name":"Fintech"}]"#).is_err());
    assert!(ListPayload::decode(ListKey::Metrics, r#"{"items":[]}"#).is_err());
}

#[test]
fn empty_list_payload() {
    let payload = ListPayload::decode(ListKey::MetricSnapshots, "[]").expect("snapshots");
    assert_eq!(payload, ListPayload::MetricSnapshots(Vec::new()));
}
