use super::*;

#[test]
fn decision_with_blank_remarks_serializes_null() {
    let decision = VerifyDecision::from_form(DecisionStatus::Accepted, "   ");
    assert_eq!(
        serde_json::to_string(&decision).unwrap(),
        r#"{"status":"accepted","remarks":null}"#
    );
}

#[test]
fn decision_with_remarks_serializes_trimmed_text() {
    let decision = VerifyDecision::from_form(DecisionStatus::Rejected, " blurry scan ");
    assert_eq!(
        serde_json::to_string(&decision).unwrap(),
        r#"{"status":"rejected","remarks":"blurry scan"}"#
    );
}

#[test]
fn login_response_deserializes_identity_fields() {
    let raw = r#"{"id":"1","name":"A","email":"admin@x.com","token":"tok123"}"#;
    let response: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.id, "1");
    assert_eq!(response.name, "A");
    assert_eq!(response.email, "admin@x.com");
    assert_eq!(response.token, "tok123");
}

#[test]
fn client_request_deserializes_backend_shape() {
    let raw = r#"{
        "_id": "r1",
        "firstName": "Sara",
        "lastName": "Hassan",
        "email": "sara@example.com",
        "clientId": {"verificationInfo": {"frontId": "https://cdn/front.png"}}
    }"#;
    let request: ClientVerifyRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.id, "r1");
    assert_eq!(request.full_name(), "Sara Hassan");
    assert_eq!(request.contact_email(), "sara@example.com");
    assert_eq!(
        request.client.verification_info.front_id.as_deref(),
        Some("https://cdn/front.png")
    );
    assert_eq!(request.client.verification_info.back_id, None);
}

#[test]
fn missing_email_renders_placeholder() {
    let raw = r#"{"_id":"r2","firstName":"Omar","lastName":"Ali","clientId":{"verificationInfo":{}}}"#;
    let request: ClientVerifyRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.contact_email(), "N/A");
}

#[test]
fn engineer_request_distinguishes_missing_and_present_documents() {
    let raw = r#"{
        "_id": "r3",
        "firstName": "Nour",
        "lastName": "Adel",
        "email": "nour@example.com",
        "engineerId": {"verificationInfo": {
            "frontId": "https://cdn/front.png",
            "backId": "https://cdn/back.png",
            "graduationCert": "https://cdn/grad.png",
            "unionCard": ""
        }}
    }"#;
    let request: EngineerVerifyRequest = serde_json::from_str(raw).unwrap();
    let documents = &request.engineer.verification_info;
    assert_eq!(documents.military_cert, None);
    assert_eq!(documents.union_card.as_deref(), Some(""));
    assert_eq!(documents.graduation_cert.as_deref(), Some("https://cdn/grad.png"));
}
