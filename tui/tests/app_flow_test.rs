//! App flow tests
//!
//! Drives [`App`] without a real terminal: time is paused and advanced by
//! hand, events are built directly, and frames are drawn into a bare
//! ratatui buffer.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tokio::time::Instant;

use csv_screensaver::theme::PHOSPHOR_GREEN;
use csv_screensaver::App;
use screensaver_core::{AnimationTiming, DisplaySurface, Phase};

// ============================================================================
// Helpers
// ============================================================================

/// Advance the paused clock to the next deadline and fire it
async fn step(app: &mut App) -> bool {
    let Some(deadline) = app.scheduler().deadline() else {
        return false;
    };
    tokio::time::advance(deadline.saturating_duration_since(Instant::now())).await;
    app.fire_due(Instant::now())
}

async fn finish_typing(app: &mut App) {
    while app.phase() == Phase::Typing {
        assert!(step(app).await);
    }
}

fn mouse(kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 3,
        row: 4,
        modifiers: KeyModifiers::NONE,
    })
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

// ============================================================================
// Ticks
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_first_tick_after_initial_delay() {
    let mut app = App::new("hello".into(), AnimationTiming::default(), (80, 24));
    assert_eq!(app.phase(), Phase::Typing);
    assert_eq!(app.surface().text(), "█");

    tokio::time::advance(Duration::from_millis(149)).await;
    assert!(!app.fire_due(Instant::now()));

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(app.fire_due(Instant::now()));
    assert_eq!(app.surface().text(), "h█");
}

#[tokio::test(start_paused = true)]
async fn test_short_text_ends_blinking() {
    let mut app = App::new("Computer | Year".into(), AnimationTiming::default(), (80, 24));

    finish_typing(&mut app).await;

    assert_eq!(app.phase(), Phase::Blinking);
    assert_eq!(app.surface().text(), "Computer | Year█");

    assert!(step(&mut app).await);
    assert_eq!(app.surface().text(), "Computer | Year ");
}

#[tokio::test(start_paused = true)]
async fn test_wide_text_pans_within_viewport() {
    let text = "0123456789".repeat(3);
    let mut app = App::new(text, AnimationTiming::default(), (14, 5));
    finish_typing(&mut app).await;
    assert_eq!(app.phase(), Phase::Panning);

    let max_scroll = app.surface().max_scroll();
    assert_eq!(max_scroll, 31 - 10);

    for _ in 0..100 {
        assert!(step(&mut app).await);
        assert!(app.surface().scroll_x() <= max_scroll);
        assert_eq!(app.surface().scroll_x(), app.engine().state().pan_offset);
    }
}

#[tokio::test(start_paused = true)]
async fn test_resize_stops_panning_scroll() {
    let mut app = App::new("x".repeat(30), AnimationTiming::default(), (14, 5));
    finish_typing(&mut app).await;
    assert_eq!(app.phase(), Phase::Panning);

    app.handle_event(&Event::Resize(120, 40));
    assert!(step(&mut app).await);

    assert_eq!(app.surface().viewport_width(), 116);
    assert_eq!(app.surface().scroll_x(), 0);
    assert_eq!(app.engine().state().pan_offset, 0);
}

#[tokio::test(start_paused = true)]
async fn test_empty_text_is_static() {
    let mut app = App::new(String::new(), AnimationTiming::default(), (80, 24));

    assert_eq!(app.phase(), Phase::Idle);
    assert_eq!(app.surface().text(), "█");
    assert_eq!(app.scheduler().deadline(), None);
    assert!(!step(&mut app).await);
}

// ============================================================================
// Exit
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_key_press_quits_and_cancels() {
    let mut app = App::new("hello".into(), AnimationTiming::default(), (80, 24));
    assert!(app.scheduler().deadline().is_some());

    app.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::NONE,
    )));

    assert!(!app.is_running());
    assert!(app.scheduler().is_idle());
    assert!(!step(&mut app).await);
}

#[tokio::test(start_paused = true)]
async fn test_key_release_is_ignored() {
    let mut app = App::new("hello".into(), AnimationTiming::default(), (80, 24));

    app.handle_event(&Event::Key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    )));

    assert!(app.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_mouse_press_quits_but_movement_does_not() {
    let mut app = App::new("hello".into(), AnimationTiming::default(), (80, 24));

    app.handle_event(&mouse(MouseEventKind::Moved));
    app.handle_event(&mouse(MouseEventKind::ScrollDown));
    assert!(app.is_running());

    app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left)));
    assert!(!app.is_running());
    assert!(app.scheduler().is_idle());
}

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_render_inside_margins() {
    let mut app = App::new("ab\ncd".into(), AnimationTiming::default(), (10, 5));
    finish_typing(&mut app).await;

    let area = Rect::new(0, 0, 10, 5);
    let mut buf = Buffer::empty(area);
    app.surface_mut().render(area, &mut buf);

    assert_eq!(row_text(&buf, 0), "          ");
    assert_eq!(row_text(&buf, 1), "  ab      ");
    assert_eq!(row_text(&buf, 2), "  cd█     ");
    assert_eq!(buf[(2, 1)].fg, PHOSPHOR_GREEN);
}

#[tokio::test(start_paused = true)]
async fn test_render_follows_last_line() {
    let text = (0..10).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n");
    let mut app = App::new(text, AnimationTiming::default(), (12, 5));
    finish_typing(&mut app).await;

    let area = Rect::new(0, 0, 12, 5);
    let mut buf = Buffer::empty(area);
    app.surface_mut().render(area, &mut buf);

    // Three text rows between the margins; the last one holds the cursor
    assert_eq!(row_text(&buf, 1), "  line7     ");
    assert_eq!(row_text(&buf, 2), "  line8     ");
    assert_eq!(row_text(&buf, 3), "  line9█    ");
}
