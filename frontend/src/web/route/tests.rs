use super::*;

#[test]
fn known_paths_parse() {
    assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
    assert_eq!(AppRoute::from_path("/register"), Some(AppRoute::Register));
    assert_eq!(AppRoute::from_path("/manager"), Some(AppRoute::Manager));
    assert_eq!(AppRoute::from_path("/employee"), Some(AppRoute::Employee));
}

#[test]
fn unmatched_paths_do_not_parse() {
    // Unmatched means the router redirects to /login.
    assert_eq!(AppRoute::from_path("/"), None);
    assert_eq!(AppRoute::from_path("/admin"), None);
    assert_eq!(AppRoute::from_path("/manager/"), None);
    assert_eq!(AppRoute::from_path(""), None);
}

#[test]
fn path_round_trip() {
    for route in [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Manager,
        AppRoute::Employee,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), Some(route));
    }
}

#[test]
fn role_gates() {
    use teampulse_shared::Role;
    assert_eq!(AppRoute::Manager.required_role(), Some(Role::Manager));
    assert_eq!(AppRoute::Employee.required_role(), Some(Role::Employee));
    assert_eq!(AppRoute::Login.required_role(), None);
    assert_eq!(AppRoute::Register.required_role(), None);
}

#[test]
fn dashboards_by_role() {
    use teampulse_shared::Role;
    assert_eq!(AppRoute::dashboard_for(Role::Manager), AppRoute::Manager);
    assert_eq!(AppRoute::dashboard_for(Role::Employee), AppRoute::Employee);
}

#[test]
fn announcement_lists_by_role() {
    // The authoring manager reads /team; the employee feed is /my.
    assert_eq!(announcements_list_path(true), "/announcements/team");
    assert_eq!(announcements_list_path(false), "/announcements/my");
}

#[test]
fn assignment_lists_by_role() {
    assert_eq!(assignments_list_path(true), "/assignments/team");
    assert_eq!(assignments_list_path(false), "/assignments/my");
}

#[test]
fn manager_tab_identity_strings() {
    let ids: Vec<&str> = ManagerTab::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(ids, ["team", "assignments", "announcements", "documents"]);
}

#[test]
fn employee_tab_identity_strings() {
    let ids: Vec<&str> = EmployeeTab::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        ids,
        ["manager", "peer", "announcements", "assignments", "documents"]
    );
}
