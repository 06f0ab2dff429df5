//! Role-based route guard.
//!
//! Maps the pair *(is someone logged in, which role)* onto the page that may be
//! rendered. Platform crates translate [`Outcome::Redirect`] into a replacing
//! navigation, so the originally requested path is not kept anywhere.

use crate::models::{Identity, Role};

/// Client-side pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    Admin,
    Student,
    /// Any path without a page of its own, including `/`.
    Unknown,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/login" => Page::Login,
            "/signup" => Page::Signup,
            "/admin" => Page::Admin,
            "/student" => Page::Student,
            _ => Page::Unknown,
        }
    }

    /// Canonical path. `Unknown` has none and maps to `/`.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::Admin => "/admin",
            Page::Student => "/student",
            Page::Unknown => "/",
        }
    }

    /// Dashboard of a role: `/{role}`.
    pub fn home_of(role: Role) -> Self {
        match role {
            Role::Admin => Page::Admin,
            Role::Student => Page::Student,
        }
    }

    /// Only reachable while logged out.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }

    /// Roles allowed on a protected page; `None` for pages that are not protected.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Page::Admin => Some(&[Role::Admin]),
            Page::Student => Some(&[Role::Student]),
            Page::Login | Page::Signup | Page::Unknown => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render(Page),
    Redirect(Page),
}

/// Where the current identity may go when it asks for `page`.
pub fn resolve(page: Page, identity: Option<&Identity>) -> Outcome {
    let Some(identity) = identity else {
        return if page.is_public() {
            Outcome::Render(page)
        } else {
            Outcome::Redirect(Page::Login)
        };
    };

    let home = Page::home_of(identity.role);
    match page.allowed_roles() {
        Some(roles) if roles.contains(&identity.role) => Outcome::Render(page),
        _ => Outcome::Redirect(home),
    }
}

pub fn resolve_path(path: &str, identity: Option<&Identity>) -> Outcome {
    resolve(Page::from_path(path), identity)
}
