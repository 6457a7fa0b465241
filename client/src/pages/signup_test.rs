use super::*;

#[test]
fn valid_input_builds_request_with_role() {
    let request = validate_signup_input(" Ada ", "ada@example.com", "correct horse", "instructor").expect("valid");
    assert_eq!(request.name, "Ada");
    assert_eq!(request.role, Some(Role::Instructor));
}

#[test]
fn admin_cannot_self_register() {
    let request = validate_signup_input("Eve", "eve@example.com", "password123", "admin").expect("valid");
    assert_eq!(request.role, None);
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_signup_input("Ada", "ada@example.com", "short", "student"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn missing_fields_are_rejected() {
    assert_eq!(
        validate_signup_input("", "ada@example.com", "password123", "student"),
        Err("Fill in name, email and password.")
    );
    assert_eq!(validate_signup_input("Ada", "nope", "password123", "student"), Err("Enter a valid email address."));
}
