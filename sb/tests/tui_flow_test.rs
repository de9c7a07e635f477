//! Keyboard-driven walkthrough of the terminal front end

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use studybuddy::View;
use studybuddy::tui::{App, InteractionMode, render};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal
        .draw(|frame| render(app.state(), frame))
        .expect("draw should succeed");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_login_then_add_then_review_progress() {
    let mut app = App::new();

    // Submitting with an empty password shows the inline error
    type_str(&mut app, "student");
    press(&mut app, KeyCode::Enter);
    assert!(screen(&app).contains("Please enter both username and password."));

    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "pw");
    press(&mut app, KeyCode::Enter);
    assert!(app.state().is_logged_in());
    assert_eq!(app.state().current_view(), View::Planner);

    // Add lands on the repository
    press(&mut app, KeyCode::Char('i'));
    type_str(&mut app, "Read chapter 1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().current_view(), View::Repository);
    let text = screen(&app);
    assert!(text.contains("Read chapter 1"));

    press(&mut app, KeyCode::Char('4'));
    assert!(screen(&app).contains("100%"));

    // Delete from collaboration empties the shared list
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('x'));
    assert!(app.state().tracker.activities().is_empty());

    press(&mut app, KeyCode::Char('4'));
    assert!(screen(&app).contains("0%"));
}

#[test]
fn test_leaving_planner_drops_draft() {
    let mut app = App::new();
    type_str(&mut app, "u");
    press(&mut app, KeyCode::Down);
    type_str(&mut app, "p");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('i'));
    type_str(&mut app, "unfinished");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().interaction_mode, InteractionMode::Normal);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('1'));
    assert!(app.state().planner_draft.is_empty());
    assert!(app.state().tracker.activities().is_empty());
}
