use fourboard::constants::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};
use fourboard::{Board, Disc, Error, Status};

/// Visits every board reachable from `board` in at most `depth` moves, stopping at won boards.
fn walk(board: &Board, depth: u32, visit: &mut dyn FnMut(&Board)) {
    visit(board);
    if depth == 0 || board.status().is_terminal() {
        return;
    }
    for (_, child) in board.children() {
        walk(&child, depth - 1, visit);
    }
}

fn assert_same_columns(a: &Board, b: &Board) {
    for x in 0..BOARD_WIDTH {
        assert_eq!(a.column(x), b.column(x), "column {} differs", x);
    }
}

/// Long games that fill most of the board
const VARIATIONS: [&str; 4] = [
    "121212343434565656777777212121434343656565",
    "4444443333332222225555551111116666667777",
    "7654321765432176543217654321",
    "44444433333355555522222266666611",
];

#[test]
fn ply_and_disc_values_follow_move_order() {
    for variation in VARIATIONS.iter() {
        let mut board = Board::empty();
        for (index, ch) in variation.chars().enumerate() {
            let column = ch.to_digit(10).unwrap() - 1;
            let height = board.get_height(column);
            board.play(column).unwrap();
            let expected = if index % 2 == 0 { Disc::White } else { Disc::Red };
            assert_eq!(board.get_disc_at(column, height), Some(expected));
            assert_eq!(board.last_move().map(|m| m.disc), Some(expected));
            assert_eq!(board.ply(), index as u32 + 1);
        }
    }
}

#[test]
fn ply_matches_disc_count() {
    walk(&Board::empty(), 4, &mut |board: &Board| {
        let discs: u32 = (0..BOARD_WIDTH).map(|x| board.get_height(x)).sum();
        assert_eq!(board.ply(), discs);
    });
}

#[test]
fn codes_round_trip() {
    walk(&Board::empty(), 4, &mut |board: &Board| {
        let decoded = Board::from_code(board.to_code()).unwrap();
        assert_same_columns(board, &decoded);
        assert_eq!(decoded.ply(), board.ply());
        assert_eq!(decoded.last_move(), None);
    });
    for variation in VARIATIONS.iter() {
        let board = Board::from_variation(variation).unwrap();
        let decoded = Board::from_code(board.to_code()).unwrap();
        assert_same_columns(&board, &decoded);
        assert_eq!(decoded.to_code(), board.to_code());
    }
}

#[test]
fn distinct_boards_have_distinct_codes() {
    let mut codes = std::collections::HashSet::new();
    let mut boards = std::collections::HashSet::new();
    walk(&Board::empty(), 4, &mut |board: &Board| {
        let decoded = Board::from_code(board.to_code()).unwrap();
        boards.insert(decoded);
        codes.insert(board.to_code());
    });
    assert_eq!(codes.len(), boards.len());
}

#[test]
fn children_leave_the_board_untouched() {
    for variation in VARIATIONS.iter() {
        let board = Board::from_variation(variation).unwrap();
        let code = board.to_code();
        let before = board;
        let children = board.children();
        assert_eq!(board.to_code(), code);
        assert_eq!(board, before);

        let open_columns = (0..BOARD_WIDTH)
            .filter(|&x| board.get_height(x) < BOARD_HEIGHT)
            .count();
        assert_eq!(children.len(), open_columns);
        for (column, child) in children.iter() {
            assert_eq!(child.ply(), board.ply() + 1);
            assert_eq!(child.get_height(*column), board.get_height(*column) + 1);
            assert_eq!(child.last_move().map(|m| m.column), Some(*column));
        }
    }
}

#[test]
fn full_column_rejects_moves() {
    let mut board = Board::from_variation("333333").unwrap();
    let code = board.to_code();
    assert_eq!(board.play(2), Err(Error::ColumnFull { column: 2 }));
    assert_eq!(board.to_code(), code);
    assert_eq!(board.ply(), 6);
    assert_eq!(board.after_move(2), Err(Error::ColumnFull { column: 2 }));
}

#[test]
fn terminal_statuses() {
    assert_eq!(Board::empty().status(), Status::Ongoing);

    let draw = Board::from_variation(VARIATIONS[0]).unwrap();
    assert_eq!(draw.ply(), BOARD_CELLS);
    assert_eq!(draw.status(), Status::Draw);

    let vertical = Board::from_variation("1212121").unwrap();
    assert_eq!(vertical.status(), Status::Player1Wins);

    let vertical = Board::from_variation("21212121").unwrap();
    assert_eq!(vertical.status(), Status::Player2Wins);
}

#[test]
fn first_line_in_scan_order_decides() {
    // Both players own a vertical four, which no real game reaches. Column 1 is scanned first.
    let mut red_first = Board::empty();
    let mut white_first = Board::empty();
    let fours = |board: &mut Board, first: u32, second: u32| {
        for _ in 0..4 {
            board.play(first).unwrap();
            board.play(second).unwrap();
        }
    };
    fours(&mut red_first, 5, 1);
    fours(&mut white_first, 1, 5);
    assert_eq!(red_first.status(), Status::Player2Wins);
    assert_eq!(white_first.status(), Status::Player1Wins);
}
