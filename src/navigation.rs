//! Role vocabulary and the static navigation table.
//!
//! Every role-gated surface in the app (sidebar, mobile menu, route guards)
//! reads from this module, so "who can see what" has one definition. The
//! original screens disagreed on whether interviewers counted as elevated
//! users; here the role sets are named constants and nothing compares role
//! strings ad hoc.
//!
//! Ordering policy: [`visible_items`] preserves declaration order of
//! [`NAV_ITEMS`], with Dashboard pinned first. Both the desktop sidebar and
//! the abbreviated mobile menu render the same filtered sequence.

use std::collections::BTreeSet;

/// Roles issued by the backend in token claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Interviewer,
    User,
}

impl Role {
    /// Parses a role claim string. Unknown names yield `None` so a newer
    /// backend vocabulary degrades to reduced visibility instead of a
    /// decode failure.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "INTERVIEWER" => Some(Self::Interviewer),
            "USER" => Some(Self::User),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Interviewer => "INTERVIEWER",
            Self::User => "USER",
        }
    }
}

/// Every role; candidates, interviewers, and admins alike.
pub const EVERYONE: &[Role] = &[Role::Admin, Role::Interviewer, Role::User];
/// Hiring staff: may manage openings and run interviews.
pub const STAFF: &[Role] = &[Role::Admin, Role::Interviewer];
/// Platform administration only.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// One entry in the navigation menu.
///
/// `icon` is an opaque handle for the icon font; `allowed_roles` must be
/// non-empty and is the same data the route guard for `path` consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
}

/// The full menu, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/",
        label: "Dashboard",
        icon: "dashboard",
        allowed_roles: EVERYONE,
    },
    NavItem {
        path: "/jobs",
        label: "Job Openings",
        icon: "work",
        allowed_roles: EVERYONE,
    },
    NavItem {
        path: "/applications",
        label: "Applications",
        icon: "description",
        allowed_roles: EVERYONE,
    },
    NavItem {
        path: "/interviews",
        label: "Interviews",
        icon: "groups",
        allowed_roles: STAFF,
    },
    NavItem {
        path: "/calendar",
        label: "Calendar",
        icon: "calendar_month",
        allowed_roles: EVERYONE,
    },
    NavItem {
        path: "/admin/roles",
        label: "Roles",
        icon: "badge",
        allowed_roles: ADMIN_ONLY,
    },
    NavItem {
        path: "/admin/user-roles",
        label: "User Roles",
        icon: "manage_accounts",
        allowed_roles: ADMIN_ONLY,
    },
    NavItem {
        path: "/admin/technologies",
        label: "Technologies",
        icon: "memory",
        allowed_roles: ADMIN_ONLY,
    },
    NavItem {
        path: "/admin/users",
        label: "Users",
        icon: "group",
        allowed_roles: ADMIN_ONLY,
    },
];

/// True when the holder of `held` may see something restricted to `allowed`.
pub fn intersects(allowed: &[Role], held: &BTreeSet<Role>) -> bool {
    allowed.iter().any(|role| held.contains(role))
}

/// Filters `items` to those visible for `roles`, preserving table order.
///
/// Side-effect free; callers re-run it on every render.
pub fn visible_items<'a>(items: &'a [NavItem], roles: &BTreeSet<Role>) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|item| intersects(item.allowed_roles, roles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(list: &[Role]) -> BTreeSet<Role> {
        list.iter().copied().collect()
    }

    #[test]
    fn parse_known_and_unknown_roles() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("INTERVIEWER"), Some(Role::Interviewer));
        assert_eq!(Role::parse("USER"), Some(Role::User));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("SUPERUSER"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn all_nav_items_declare_at_least_one_role() {
        for item in NAV_ITEMS {
            assert!(
                !item.allowed_roles.is_empty(),
                "{} has no allowed roles",
                item.path
            );
        }
    }

    #[test]
    fn visible_items_is_deterministic() {
        let held = roles(&[Role::Interviewer]);
        let first = visible_items(NAV_ITEMS, &held);
        let second = visible_items(NAV_ITEMS, &held);
        assert_eq!(first, second);
    }

    #[test]
    fn visibility_matches_role_intersection_exactly() {
        for held in [
            roles(&[]),
            roles(&[Role::User]),
            roles(&[Role::Interviewer]),
            roles(&[Role::Admin]),
            roles(&[Role::User, Role::Interviewer]),
            roles(EVERYONE),
        ] {
            let visible = visible_items(NAV_ITEMS, &held);
            for item in NAV_ITEMS {
                let expected = intersects(item.allowed_roles, &held);
                assert_eq!(visible.contains(&item), expected, "{}", item.path);
            }
        }
    }

    #[test]
    fn plain_user_sees_no_staff_or_admin_entries() {
        const TABLE: &[NavItem] = &[
            NavItem {
                path: "/roles",
                label: "Roles",
                icon: "badge",
                allowed_roles: ADMIN_ONLY,
            },
            NavItem {
                path: "/dashboard",
                label: "Dashboard",
                icon: "dashboard",
                allowed_roles: EVERYONE,
            },
        ];

        let visible = visible_items(TABLE, &roles(&[Role::User]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].path, "/dashboard");
    }

    #[test]
    fn empty_role_set_sees_nothing() {
        assert!(visible_items(NAV_ITEMS, &roles(&[])).is_empty());
    }

    #[test]
    fn table_order_is_preserved() {
        let visible = visible_items(NAV_ITEMS, &roles(&[Role::Admin]));
        let paths: Vec<&str> = visible.iter().map(|item| item.path).collect();
        let expected: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths, expected);
        assert_eq!(paths.first(), Some(&"/"));
    }
}
