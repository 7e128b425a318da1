use super::*;

#[test]
fn dashboard_title_only_on_exact_root() {
    assert_eq!(section_title("/"), "Dashboard");
    assert_eq!(section_title("/unknown"), "Dashboard");
}

#[test]
fn client_routes_share_the_clients_title() {
    assert_eq!(section_title("/client"), "Clients");
    assert_eq!(section_title("/clientdetails"), "Clients");
}

#[test]
fn engineer_routes_share_the_engineers_title() {
    assert_eq!(section_title("/engineer"), "Engineers");
    assert_eq!(section_title("/engineerdetails"), "Engineers");
}
