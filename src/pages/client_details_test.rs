use super::*;

#[test]
fn slots_keep_display_order() {
    let documents = ClientDocuments {
        front_id: Some("https://cdn/front.png".to_owned()),
        back_id: None,
    };
    let slots = document_slots(&documents);
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0], ("Front Side", Some("https://cdn/front.png".to_owned())));
    assert_eq!(slots[1], ("Back Side", None));
}
