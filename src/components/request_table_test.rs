use super::*;

#[test]
fn row_formats_full_name_and_initials() {
    let row = RequestRow::new("r1", "sara", "hassan", "sara@example.com");
    assert_eq!(row.name, "sara hassan");
    assert_eq!(row.initials, "SH");
    assert_eq!(row.email, "sara@example.com");
}

#[test]
fn initials_tolerate_empty_names() {
    assert_eq!(initials("", ""), "");
    assert_eq!(initials("Omar", ""), "O");
}
