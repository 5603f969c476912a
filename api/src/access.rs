//! Which pages a visitor may open, by login state and role.

use crate::model::user::{Role, UserDto};

/// Pages open to anonymous visitors, matched as path prefixes.
const PUBLIC_PREFIXES: &[&str] = &[
    "/competitions",
    "/teams",
    "/players",
    "/matches",
    "/media",
    "/login",
    "/register",
];

const PLAYER_ROUTES: &[&str] = &[
    "/dashboard/profile",
    "/dashboard/messages",
    "/dashboard/notifications",
];

/// Dashboard sections reachable by `role`, matched as path prefixes.
pub fn role_routes(role: &Role) -> Vec<&'static str> {
    let mut routes = PLAYER_ROUTES.to_vec();
    match role {
        Role::Coach => routes.push("/dashboard/coach"),
        Role::Organizer => routes.push("/dashboard/organizer"),
        Role::Admin => routes.insert(0, "/dashboard/admin"),
        _ => {}
    }
    routes
}

/// Prefix match on whole path segments, so `/teams` covers `/teams/4` but not `/teamsx`.
fn has_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}

pub fn is_public_route(path: &str) -> bool {
    path == "/" || PUBLIC_PREFIXES.iter().any(|prefix| has_prefix(path, prefix))
}

/// Whether `user` holds one of `allowed_roles`; an empty list admits any logged-in user.
pub fn has_access(user: Option<&UserDto>, allowed_roles: &[Role]) -> bool {
    let Some(user) = user else {
        return false;
    };

    if allowed_roles.is_empty() {
        return true;
    }

    user.role
        .as_ref()
        .is_some_and(|role| allowed_roles.contains(role))
}

pub fn can_access_route(user: Option<&UserDto>, path: &str) -> bool {
    if is_public_route(path) {
        return true;
    }

    let Some(user) = user else {
        return false;
    };

    if path == "/dashboard" || path == "/dashboard/" {
        return true;
    }

    user.role.as_ref().is_some_and(|role| {
        role_routes(role)
            .iter()
            .any(|prefix| has_prefix(path, prefix))
    })
}

#[cfg(test)]
mod test;
