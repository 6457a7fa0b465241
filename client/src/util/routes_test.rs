use super::*;

#[test]
fn every_role_has_a_dashboard_landing_route() {
    for role in Role::ALL {
        assert!(landing_route(Some(role)).starts_with(DASHBOARD));
        assert_ne!(landing_route(Some(role)), DASHBOARD);
    }
}

#[test]
fn instructor_lands_on_overview() {
    assert_eq!(landing_route(Some(Role::Instructor)), "/dashboard/overview");
}

#[test]
fn unknown_role_falls_back_to_dashboard() {
    assert_eq!(landing_route(None), "/dashboard");
}
