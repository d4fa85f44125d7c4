//! Route access decisions.
//!
//! [`decide`] is evaluated on every navigation from whatever the session store
//! holds at that moment. It has no notion of token validity: an expired token
//! passes until the server rejects it.

use api::{Role, Session};

/// Who is looking at the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visitor {
    Anonymous,
    User,
    Admin,
}

impl Visitor {
    pub fn from_session(session: Option<&Session>) -> Self {
        match session.map(Session::role) {
            None => Visitor::Anonymous,
            Some(Role::User) => Visitor::User,
            Some(Role::Admin) => Visitor::Admin,
        }
    }
}

/// What a route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    AdminOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectToLogin,
    /// Signed in, but not allowed here. Send to the user dashboard.
    RedirectToUserHome,
}

pub fn decide(visitor: Visitor, access: Access) -> Decision {
    match (visitor, access) {
        (_, Access::Public) => Decision::Render,
        (Visitor::Anonymous, _) => Decision::RedirectToLogin,
        (Visitor::User, Access::Authenticated) => Decision::Render,
        (Visitor::User, Access::AdminOnly) => Decision::RedirectToUserHome,
        (Visitor::Admin, _) => Decision::Render,
    }
}
