use super::*;
use crate::report::DisplayInfo;

const COLUMNS: u16 = 80;
const ROWS: u16 = 24;

fn setup() -> (PlotWidget, AppState) {
    let widget = PlotWidget::new(CellSize::new(8.0, 16.0), 30.0, COLUMNS, ROWS);
    let state = AppState::new(widget.viewport(), Mode::Euclidean).with_samples();
    (widget, state)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn left(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn viewport_excludes_info_rows() {
    let (widget, _) = setup();
    assert_eq!(widget.plot_rows(), 18);
    assert_eq!(widget.viewport(), Viewport::new(640.0, 288.0));
}

#[test]
fn click_adds_point_after_double_click_window() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    widget.event(&left(1, 1), &mut state, t0);
    assert_eq!(state.points().len(), 3);
    assert_eq!(widget.poll_timeout(t0), DOUBLE_CLICK_WINDOW);

    widget.tick(&mut state, t0 + Duration::from_millis(100));
    assert_eq!(state.points().len(), 3);

    widget.tick(&mut state, t0 + Duration::from_millis(500));
    assert_eq!(state.points().len(), 4);
    assert_eq!(state.points().get(3), Some(&Point::new(12.0, 24.0)));
    assert_eq!(widget.poll_timeout(t0), IDLE_POLL);
}

#[test]
fn pending_click_lands_while_pointer_keeps_moving() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    widget.step(Some(&left(1, 1)), &mut state, t0);
    for ms in [100, 200, 300] {
        let moved = mouse(MouseEventKind::Moved, 2, 2);
        widget.step(Some(&moved), &mut state, t0 + Duration::from_millis(ms));
    }
    assert_eq!(state.points().len(), 3);

    let moved = mouse(MouseEventKind::Moved, 3, 3);
    widget.step(Some(&moved), &mut state, t0 + Duration::from_millis(450));
    assert_eq!(state.points().len(), 4);
    assert_eq!(state.points().get(3), Some(&Point::new(12.0, 24.0)));
}

#[test]
fn step_without_event_only_ticks() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    widget.event(&left(1, 1), &mut state, t0);
    assert_eq!(widget.step(None, &mut state, t0), Flow::Continue);
    assert_eq!(state.points().len(), 3);
    assert_eq!(
        widget.step(None, &mut state, t0 + DOUBLE_CLICK_WINDOW),
        Flow::Continue
    );
    assert_eq!(state.points().len(), 4);
}

#[test]
fn double_click_removes_nearest_point() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    // Cell (12, 7) is centered on the sample point (100, 120)
    widget.event(&left(12, 7), &mut state, t0);
    widget.event(&left(12, 7), &mut state, t0 + Duration::from_millis(150));
    widget.tick(&mut state, t0 + Duration::from_secs(1));
    assert_eq!(state.points().len(), 2);
    assert!(state
        .points()
        .iter()
        .all(|p| *p != Point::new(100.0, 120.0)));
}

#[test]
fn slow_second_click_adds_two_points() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    widget.event(&left(1, 1), &mut state, t0);
    widget.event(&left(1, 1), &mut state, t0 + Duration::from_millis(600));
    assert_eq!(state.points().len(), 4);
    widget.tick(&mut state, t0 + Duration::from_millis(1200));
    assert_eq!(state.points().len(), 5);
}

#[test]
fn right_click_removes_immediately() {
    let (mut widget, mut state) = setup();
    widget.event(
        &mouse(MouseEventKind::Down(MouseButton::Right), 30, 12),
        &mut state,
        Instant::now(),
    );
    assert_eq!(state.points().len(), 2);
}

#[test]
fn clicks_on_info_rows_are_ignored() {
    let (mut widget, mut state) = setup();
    let t0 = Instant::now();
    widget.event(&left(5, 20), &mut state, t0);
    widget.tick(&mut state, t0 + Duration::from_secs(1));
    assert_eq!(state.points().len(), 3);
}

#[test]
fn pointer_move_sets_focus() {
    let (mut widget, mut state) = setup();
    widget.event(&mouse(MouseEventKind::Moved, 50, 5), &mut state, Instant::now());
    assert_eq!(state.focus(), Some(Point::new(404.0, 88.0)));
    assert_eq!(state.highlighted(), Some(2));
    assert!(widget.needs_paint());
}

#[test]
fn keys_drive_state() {
    let (mut widget, mut state) = setup();
    let now = Instant::now();
    assert_eq!(widget.event(&key('m'), &mut state, now), Flow::Continue);
    assert_eq!(state.mode(), Mode::Minkowski);
    widget.event(&key('o'), &mut state, now);
    assert!(state.show_circles());
    widget.event(&key('c'), &mut state, now);
    assert!(state.points().is_empty());
    assert_eq!(widget.event(&key('q'), &mut state, now), Flow::Quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(widget.event(&ctrl_c, &mut state, now), Flow::Quit);
}

#[test]
fn key_commits_pending_click_first() {
    let (mut widget, mut state) = setup();
    let now = Instant::now();
    widget.event(&left(1, 1), &mut state, now);
    widget.event(&key('c'), &mut state, now);
    assert!(state.points().is_empty());
    widget.tick(&mut state, now + Duration::from_secs(1));
    assert!(state.points().is_empty());
}

#[test]
fn resize_updates_viewport() {
    let (mut widget, mut state) = setup();
    widget.event(&Event::Resize(100, 40), &mut state, Instant::now());
    assert_eq!(state.viewport(), Viewport::new(800.0, 544.0));
    assert_eq!(state.viewport().center(), Point::new(400.0, 272.0));
}

#[test]
fn euclidean_frame_shows_points_and_status() {
    let (mut widget, mut state) = setup();
    let canvas = widget.paint(&mut state);
    assert!(!widget.needs_paint());
    assert_eq!(canvas.get(12, 7).map(|c| c.glyph), Some(POINT_GLYPH));
    assert_eq!(canvas.get(30, 12).map(|c| c.glyph), Some(POINT_GLYPH));
    assert!(canvas.row_text(23).starts_with("Mode: Euclidean | 3 points"));
    assert_eq!(canvas.row_text(18).trim(), "");
}

#[test]
fn nearest_point_is_highlighted_and_reported() {
    let (mut widget, mut state) = setup();
    widget.event(&mouse(MouseEventKind::Moved, 13, 7), &mut state, Instant::now());
    let canvas = widget.paint(&mut state);
    assert_eq!(canvas.get(12, 7).map(|c| c.glyph), Some(NEAREST_GLYPH));
    assert_eq!(canvas.row_text(18).trim_end(), state.report().to_string());
}

#[test]
fn minkowski_frame_draws_axes_curves_and_table() {
    let (mut widget, mut state) = setup();
    state.set_mode(Mode::Minkowski);
    let canvas = widget.paint(&mut state);

    // Center (320, 144) lands on cell (40, 9)
    assert_eq!(canvas.get(40, 9).map(|c| c.glyph), Some('┼'));
    assert_eq!(canvas.get(0, 9).map(|c| c.glyph), Some('─'));
    assert_eq!(canvas.get(40, 16).map(|c| c.glyph), Some('│'));

    // Apex of the s = 40 curves: (320, 104) -> cell (40, 6)
    assert_eq!(canvas.get(40, 6).map(|c| c.glyph), Some(CURVE_GLYPH));
    // s = 80 below the origin: (320, 224) -> cell (40, 14)
    assert_eq!(canvas.get(40, 14).map(|c| c.glyph), Some(CURVE_GLYPH));

    assert!(matches!(state.report(), DisplayInfo::Table(_)));
    assert_eq!(canvas.row_text(18).trim_end(), "Invariant table (s^2 = t^2 - x^2):");
    assert!(canvas.row_text(19).starts_with("#1: s^2="));
    assert!(canvas.row_text(23).starts_with("Mode: Minkowski"));
}

#[test]
fn long_table_is_truncated() {
    let (mut widget, mut state) = setup();
    state.set_mode(Mode::Minkowski);
    for i in 0..5 {
        state.add_point_at(10.0 * i as f64, 10.0).unwrap();
    }
    let canvas = widget.paint(&mut state);
    // Header plus eight rows, five lines of room
    assert!(canvas.row_text(22).starts_with("... (5 more)"));
}
