use super::*;

#[test]
fn active_users_get_suspended() {
    assert_eq!(next_status(Some("active")), UserStatus::Suspended);
}

#[test]
fn inactive_suspended_or_unknown_users_get_activated() {
    assert_eq!(next_status(Some("suspended")), UserStatus::Active);
    assert_eq!(next_status(Some("inactive")), UserStatus::Active);
    assert_eq!(next_status(None), UserStatus::Active);
}

#[test]
fn status_change_leaves_role_untouched() {
    let body = serde_json::to_value(status_change(UserStatus::Suspended)).expect("json");
    assert_eq!(body, serde_json::json!({ "status": "suspended" }));
}

#[test]
fn role_change_parses_known_roles_only() {
    assert_eq!(
        role_change("instructor"),
        Some(UpdateUserStatusRequest { status: None, role: Some(Role::Instructor) })
    );
    assert_eq!(role_change("superuser"), None);
}
