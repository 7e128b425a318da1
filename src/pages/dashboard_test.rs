use super::*;

#[test]
fn count_caption_pairs_count_and_noun() {
    assert_eq!(count_caption(0, "Clients"), "0 Clients");
    assert_eq!(count_caption(12, "Engineers"), "12 Engineers");
}
