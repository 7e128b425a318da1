use super::*;
use crate::net::types::{ClientDocuments, ClientIdentity};

fn request(id: &str, first: &str, last: &str, email: Option<&str>) -> ClientVerifyRequest {
    ClientVerifyRequest {
        id: id.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.map(str::to_owned),
        client: ClientIdentity {
            verification_info: ClientDocuments::default(),
        },
    }
}

#[test]
fn rows_preserve_order_and_ids() {
    let rows = request_rows(&[
        request("r1", "Sara", "Hassan", Some("sara@example.com")),
        request("r2", "Omar", "Ali", None),
    ]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "r1");
    assert_eq!(rows[0].name, "Sara Hassan");
    assert_eq!(rows[1].email, "N/A");
}
