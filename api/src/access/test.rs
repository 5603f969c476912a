use super::*;

fn user(role: Role) -> UserDto {
    UserDto {
        id: Some(1),
        role: Some(role),
        ..Default::default()
    }
}

/// Tests the public pages.
///
/// Expected: the root only matches exactly, listing pages match with their sub-pages
#[test]
fn public_routes() {
    for path in ["/", "/competitions", "/competitions/4", "/teams/2", "/login", "/media"] {
        assert!(is_public_route(path), "{}", path);
        assert!(can_access_route(None, path), "{}", path);
    }

    for path in ["/dashboard", "/dashboard/profile", "/teamsx", "/admin"] {
        assert!(!is_public_route(path), "{}", path);
    }
}

/// Tests that anonymous visitors cannot reach the dashboard.
///
/// Expected: false for every dashboard page
#[test]
fn anonymous_visitors_are_kept_out() {
    assert!(!can_access_route(None, "/dashboard"));
    assert!(!can_access_route(None, "/dashboard/coach"));
    assert!(!can_access_route(None, "/dashboard/messages"));
}

/// Tests dashboard sections per role.
///
/// Expected: shared sections for all, coach and organizer sections kept apart
#[test]
fn dashboard_sections_per_role() {
    let player = user(Role::Player);
    let coach = user(Role::Coach);
    let organizer = user(Role::Organizer);
    let admin = user(Role::Admin);

    for u in [&player, &coach, &organizer, &admin] {
        assert!(can_access_route(Some(u), "/dashboard"));
        assert!(can_access_route(Some(u), "/dashboard/profile"));
        assert!(can_access_route(Some(u), "/dashboard/messages/12"));
    }

    assert!(can_access_route(Some(&coach), "/dashboard/coach/matches/3"));
    assert!(!can_access_route(Some(&coach), "/dashboard/organizer"));

    assert!(can_access_route(Some(&organizer), "/dashboard/organizer/match-validation"));
    assert!(!can_access_route(Some(&organizer), "/dashboard/coach"));

    assert!(!can_access_route(Some(&player), "/dashboard/coach"));
    assert!(can_access_route(Some(&admin), "/dashboard/admin"));
    assert!(!can_access_route(Some(&coach), "/dashboard/admin"));
}

#[test]
fn user_without_role_only_reaches_dashboard_root() {
    let no_role = UserDto::default();
    assert!(can_access_route(Some(&no_role), "/dashboard"));
    assert!(!can_access_route(Some(&no_role), "/dashboard/profile"));
}

/// Tests role checks used by the route guards.
///
/// Expected: empty role list admits any logged-in user
#[test]
fn role_checks() {
    let coach = user(Role::Coach);

    assert!(has_access(Some(&coach), &[]));
    assert!(has_access(Some(&coach), &[Role::Coach, Role::Admin]));
    assert!(!has_access(Some(&coach), &[Role::Organizer]));
    assert!(!has_access(None, &[]));
    assert!(!has_access(Some(&UserDto::default()), &[Role::Coach]));
}
