use super::*;
use crate::net::types::{EngineerDocuments, EngineerIdentity};

#[test]
fn rows_map_engineer_records() {
    let requests = vec![EngineerVerifyRequest {
        id: "r3".to_owned(),
        first_name: "Nour".to_owned(),
        last_name: "Adel".to_owned(),
        email: Some("nour@example.com".to_owned()),
        engineer: EngineerIdentity {
            verification_info: EngineerDocuments::default(),
        },
    }];
    let rows = request_rows(&requests);
    assert_eq!(rows[0].id, "r3");
    assert_eq!(rows[0].initials, "NA");
    assert_eq!(rows[0].email, "nour@example.com");
}
