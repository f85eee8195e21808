//! Navigation bar model
//!
//! Decides which actions the bar offers for a session and what activating them does.

use std::fmt;

use crate::session::Session;

pub const APP_TITLE: &str = "Calorie App";

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
}

/// Actions offered by the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Login,
    Register,
    Logout,
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavItem::Login => write!(f, "Login"),
            NavItem::Register => write!(f, "Register"),
            NavItem::Logout => write!(f, "Logout"),
        }
    }
}

pub struct Navbar;

impl Navbar {
    /// Items to show for the given session, in display order
    pub fn items(session: &Session) -> Vec<NavItem> {
        if session.is_authenticated() {
            vec![NavItem::Logout]
        } else {
            vec![NavItem::Login, NavItem::Register]
        }
    }

    /// Activate an item and return the route to show next
    pub fn activate(item: NavItem, session: &mut Session) -> Route {
        match item {
            NavItem::Login => Route::Login,
            NavItem::Register => Route::Register,
            NavItem::Logout => {
                session.logout();
                Route::Home
            }
        }
    }
}

#[cfg(test)]
#[path = "navbar_tests.rs"]
mod navbar_tests;
