use linedit::{Changes, Command, Cursor, Direction, EditError, Editor, TextOps};

mod support;
use support::mock_buffer::MockBuffer;

fn at(line: usize, column: usize) -> Cursor {
    Cursor::new(line, column)
}

#[test]
fn vertical_moves_clamp_column() {
    let buf = MockBuffer::new(&["abcdef", "xy", "hello"]);

    let cur = at(0, 5).moved(&buf, Direction::Down);
    assert_eq!(cur, at(1, 2));

    // Column is not remembered across short lines
    let cur = cur.moved(&buf, Direction::Down);
    assert_eq!(cur, at(2, 2));

    let cur = at(2, 4).moved(&buf, Direction::Up);
    assert_eq!(cur, at(1, 2));
}

#[test]
fn vertical_moves_stop_at_edges() {
    let buf = MockBuffer::new(&["abc", "def"]);
    assert_eq!(at(0, 1).moved(&buf, Direction::Up), at(0, 1));
    assert_eq!(at(1, 3).moved(&buf, Direction::Down), at(1, 3));
}

#[test]
fn left_wraps_to_previous_line_end() {
    let buf = MockBuffer::new(&["abc", "de"]);
    assert_eq!(at(1, 1).moved(&buf, Direction::Left), at(1, 0));
    assert_eq!(at(1, 0).moved(&buf, Direction::Left), at(0, 3));
    assert_eq!(at(0, 0).moved(&buf, Direction::Left), at(0, 0));
}

#[test]
fn right_wraps_to_next_line_start() {
    let buf = MockBuffer::new(&["ab", "c"]);
    assert_eq!(at(0, 1).moved(&buf, Direction::Right), at(0, 2));
    assert_eq!(at(0, 2).moved(&buf, Direction::Right), at(1, 0));
    assert_eq!(at(1, 1).moved(&buf, Direction::Right), at(1, 1));
}

#[test]
fn moves_on_empty_text_stay_at_origin() {
    let buf = MockBuffer::empty();
    for dir in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        assert_eq!(Cursor::ZERO.moved(&buf, dir), Cursor::ZERO);
    }
}

#[test]
fn multibyte_columns_count_chars() {
    let buf = MockBuffer::new(&["héllo wörld", "ñ"]);
    assert_eq!(buf.line_len(0), 11);
    assert_eq!(at(0, 11).moved(&buf, Direction::Right), at(1, 0));
    assert_eq!(at(1, 1).moved(&buf, Direction::Up), at(0, 1));
}

#[test]
fn out_of_range_start_is_clamped_first() {
    let buf = MockBuffer::new(&["abc", "de"]);
    assert_eq!(at(7, 9).moved(&buf, Direction::Left), at(1, 1));
    assert_eq!(at(0, 9).moved(&buf, Direction::Right), at(1, 0));
}

#[test]
fn buffer_and_mock_agree() {
    let lines = ["first line", "", "third", "x"];
    let mock = MockBuffer::new(&lines);
    let editor = Editor::builder().lines(lines).build();

    let dirs = [
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Up,
        Direction::Up,
    ];
    let mut a = Cursor::ZERO;
    let mut b = Cursor::ZERO;
    for dir in dirs {
        a = a.moved(&mock, dir);
        b = b.moved(editor.buffer(), dir);
        assert_eq!(a, b, "diverged after {dir:?}");
    }
}

#[test]
fn editor_move_reports_cursor_change() {
    let mut editor = Editor::builder().lines(["ab"]).build();

    assert_eq!(editor.move_cursor(Direction::Right), Changes::CURSOR);
    assert_eq!(editor.cursor(), at(0, 1));

    // Already at the top
    assert_eq!(editor.move_cursor(Direction::Up), Changes::empty());
    assert_eq!(editor.undo_depth(), 0);
    assert!(!editor.is_modified());
}

#[test]
fn move_to_validates_target() {
    let mut editor = Editor::builder().lines(["abc", "d"]).build();

    assert_eq!(editor.move_cursor_to(at(0, 3)), Ok(Changes::CURSOR));
    assert_eq!(
        editor.move_cursor_to(at(1, 2)),
        Err(EditError::CursorOutOfRange { line: 1, column: 2 })
    );
    assert_eq!(
        editor.move_cursor_to(at(2, 0)),
        Err(EditError::CursorOutOfRange { line: 2, column: 0 })
    );
    assert_eq!(editor.cursor(), at(0, 3));
}

#[test]
fn range_errors_share_one_match_arm() {
    let mut editor = Editor::builder().lines(["abc"]).build();
    let errors = [
        editor.move_cursor_to(at(4, 0)).unwrap_err(),
        editor.delete_line(3).unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(
            err,
            EditError::OutOfRange { .. } | EditError::CursorOutOfRange { .. }
        ));
    }
    assert_eq!(editor.lines(), ["abc"]);
}

#[test]
fn parsed_directions_drive_moves() {
    let mut editor = Editor::builder().lines(["abc", "def"]).build();

    for key in ['d', 'd', 's', 'a'] {
        let dir = Direction::try_from(key).unwrap();
        editor.execute(Command::Move(dir)).unwrap();
    }
    assert_eq!(editor.cursor(), at(1, 1));

    let err = Direction::try_from('q').unwrap_err();
    assert_eq!(err, EditError::InvalidDirection("q".to_string()));
    assert_eq!(editor.cursor(), at(1, 1));
}
