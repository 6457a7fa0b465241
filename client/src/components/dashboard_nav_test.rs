use super::*;

fn hrefs(role: Option<Role>) -> Vec<&'static str> {
    nav_links(role).into_iter().map(|(_, href)| href).collect()
}

#[test]
fn student_sees_profile_only() {
    assert_eq!(hrefs(Some(Role::Student)), vec![routes::PROFILE]);
}

#[test]
fn instructor_sees_overview() {
    assert_eq!(hrefs(Some(Role::Instructor)), vec![routes::PROFILE, routes::OVERVIEW]);
}

#[test]
fn admin_sees_admin_sections() {
    assert_eq!(
        hrefs(Some(Role::Admin)),
        vec![routes::PROFILE, routes::ADMIN, routes::ADMIN_CATEGORIES, routes::ADMIN_USERS]
    );
}

#[test]
fn unknown_role_sees_profile_only() {
    assert_eq!(hrefs(None), vec![routes::PROFILE]);
}
