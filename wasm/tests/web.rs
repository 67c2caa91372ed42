use fourboard_wasm::JsBoard;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn play_and_read_back() {
    let mut board = JsBoard::new("44").unwrap();
    assert_eq!(board.get_cell(3, 0), 1);
    assert_eq!(board.get_cell(3, 1), 2);
    assert_eq!(board.get_cell(3, 2), 0);
    board.play(0).unwrap();
    assert_eq!(board.get_ply(), 3);
    assert_eq!(board.get_last_column(), Some(0));
    assert_eq!(board.status(), -1);
}

#[wasm_bindgen_test]
fn code_round_trip() {
    let board = JsBoard::new("4453").unwrap();
    let decoded = JsBoard::from_code(&board.to_code()).unwrap();
    assert_eq!(decoded.to_string(), board.to_string());
    assert_eq!(decoded.get_last_column(), None);
}
