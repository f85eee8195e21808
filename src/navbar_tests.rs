//! Tests for navbar

use super::*;

#[test]
fn test_signed_out_items() {
    let items = Navbar::items(&Session::signed_out());
    insta::assert_debug_snapshot!(items, @r"
    [
        Login,
        Register,
    ]
    ");
}

#[test]
fn test_signed_in_items() {
    let items = Navbar::items(&Session::signed_in("ana"));
    assert_eq!(items, vec![NavItem::Logout]);
}

#[test]
fn test_login_and_register_route_without_touching_session() {
    let mut session = Session::signed_out();
    assert_eq!(Navbar::activate(NavItem::Login, &mut session), Route::Login);
    assert_eq!(
        Navbar::activate(NavItem::Register, &mut session),
        Route::Register
    );
    assert!(!session.is_authenticated());
}

#[test]
fn test_logout_signs_out_and_goes_home() {
    let mut session = Session::signed_in("ana");
    assert_eq!(Navbar::activate(NavItem::Logout, &mut session), Route::Home);
    assert!(!session.is_authenticated());
    assert_eq!(
        Navbar::items(&session),
        vec![NavItem::Login, NavItem::Register]
    );
}

#[test]
fn test_item_labels() {
    let labels: Vec<String> = [NavItem::Login, NavItem::Register, NavItem::Logout]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["Login", "Register", "Logout"]);
}
