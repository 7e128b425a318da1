use super::*;

#[test]
fn slots_cover_all_five_documents_in_order() {
    let documents = EngineerDocuments {
        front_id: Some("https://cdn/front.png".to_owned()),
        back_id: Some("https://cdn/back.png".to_owned()),
        military_cert: None,
        graduation_cert: Some("https://cdn/grad.png".to_owned()),
        union_card: None,
    };
    let slots = document_slots(&documents);
    let labels: Vec<&str> = slots.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        [
            "Front ID",
            "Back ID",
            "Military Certificate",
            "Graduation Certificate",
            "Union Card",
        ]
    );
    assert_eq!(slots[2].1, None);
    assert_eq!(slots[3].1.as_deref(), Some("https://cdn/grad.png"));
}
