//! Rendering tests against an in-memory terminal

use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::food::Suggestion;
use crate::session::Session;
use crate::suggest::WorkerResponse;
use crate::test_utils::test_helpers::{egg_detail, test_app, type_text};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 20;

fn render_to_string(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_signed_out_navbar() {
    let (mut app, _requests, _responses) = test_app(Session::signed_out());
    let screen = render_to_string(&mut app);

    let first_line = screen.lines().next().unwrap();
    assert!(first_line.contains("Calorie App"));
    assert!(first_line.contains("Login"));
    assert!(first_line.contains("Register"));
    assert!(!first_line.contains("Logout"));
}

#[test]
fn test_signed_in_navbar_shows_user_and_logout() {
    let (mut app, _requests, _responses) = test_app(Session::signed_in("ana"));
    let screen = render_to_string(&mut app);

    let first_line = screen.lines().next().unwrap();
    assert!(first_line.contains("ana"));
    assert!(first_line.contains("Logout"));
    assert!(!first_line.contains("Register"));
}

#[test]
fn test_idle_search_page_shows_hint() {
    let (mut app, _requests, _responses) = test_app(Session::signed_out());
    let screen = render_to_string(&mut app);

    assert!(screen.contains("Search food item & Add"));
    assert!(screen.contains("Type at least 3 characters to search"));
    assert!(screen.contains("Ctrl+C quit"));
}

#[test]
fn test_suggestions_listed_with_highlight() {
    let (mut app, _requests, responses) = test_app(Session::signed_out());
    type_text(&mut app, "egg");
    app.controller.flush_pending();
    responses
        .send(WorkerResponse::Suggestions {
            request_id: 1,
            result: Ok(vec![
                Suggestion::new("Egg, whole", ""),
                Suggestion::new("Egg white", ""),
            ]),
        })
        .unwrap();
    app.tick();

    let screen = render_to_string(&mut app);
    assert!(screen.contains("► Egg, whole"));
    assert!(screen.contains("  Egg white"));
    assert!(!screen.contains("Type at least"));
}

#[test]
fn test_in_flight_lookup_shown_in_status() {
    let (mut app, _requests, _responses) = test_app(Session::signed_out());
    type_text(&mut app, "egg");
    app.controller.flush_pending();

    let screen = render_to_string(&mut app);
    assert!(screen.contains("Searching..."));
}

#[test]
fn test_no_results_row() {
    let (mut app, _requests, responses) = test_app(Session::signed_out());
    type_text(&mut app, "xyz");
    app.controller.flush_pending();
    responses
        .send(WorkerResponse::Suggestions {
            request_id: 1,
            result: Ok(Vec::new()),
        })
        .unwrap();
    app.tick();

    let screen = render_to_string(&mut app);
    assert!(screen.contains(NO_RESULTS_LABEL));
}

#[test]
fn test_detail_popup_loading_then_loaded() {
    let (mut app, _requests, responses) = test_app(Session::signed_out());
    app.controller.on_select("Egg, whole");

    let screen = render_to_string(&mut app);
    assert!(screen.contains("Food Detail"));
    assert!(screen.contains("Loading..."));

    responses
        .send(WorkerResponse::Detail {
            request_id: 1,
            result: Ok(egg_detail()),
        })
        .unwrap();
    app.tick();

    let screen = render_to_string(&mut app);
    assert!(screen.contains("Egg, whole"));
    assert!(screen.contains("Serving: 1 large (72 kcal)"));
    assert!(screen.contains("Esc to close"));
}

#[test]
fn test_detail_popup_failure_message() {
    let (mut app, _requests, responses) = test_app(Session::signed_out());
    app.controller.on_select("Mystery");
    responses
        .send(WorkerResponse::Detail {
            request_id: 1,
            result: Err(crate::provider::ProviderError::NotFound("Mystery".to_string())),
        })
        .unwrap();
    app.tick();

    let screen = render_to_string(&mut app);
    assert!(screen.contains("No details available"));
}

#[test]
fn test_login_page() {
    let (mut app, _requests, _responses) = test_app(Session::signed_out());
    app.route = Route::Login;
    app.login_name = "ana".to_string();

    let screen = render_to_string(&mut app);
    assert!(screen.contains(" Login "));
    assert!(screen.contains("Name: ana"));
    assert!(!screen.contains("Search food item"));
}

#[test]
fn test_manual_entry_notice() {
    let (mut app, _requests, _responses) = test_app(Session::signed_out());
    app.manual_entry = Some("quinoa".to_string());

    let screen = render_to_string(&mut app);
    assert!(screen.contains("Add Manually"));
    assert!(screen.contains("No match for \"quinoa\""));
}
