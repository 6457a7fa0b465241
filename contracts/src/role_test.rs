use super::*;

#[test]
fn parse_accepts_every_wire_spelling() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn parse_rejects_unknown_and_differently_cased_roles() {
    assert_eq!(Role::parse("moderator"), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Role::Instructor).expect("json"), "\"instructor\"");
    let parsed: Role = serde_json::from_str("\"admin\"").expect("role");
    assert_eq!(parsed, Role::Admin);
}

#[test]
fn display_matches_wire_spelling() {
    assert_eq!(Role::Student.to_string(), "student");
}
