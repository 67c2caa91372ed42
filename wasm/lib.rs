use fourboard::{Board, Disc};
use wasm_bindgen::prelude::*;

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: fourboard::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(js_name = Board)]
pub struct JsBoard {
    board: Board,
}

#[wasm_bindgen(js_class = Board)]
impl JsBoard {
    #[wasm_bindgen(constructor)]
    pub fn new(variation: &str) -> Result<JsBoard, JsValue> {
        set_panic_hook();
        Board::from_variation(variation)
            .map(|board| JsBoard { board })
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = fromCode)]
    pub fn from_code(code: &str) -> Result<JsBoard, JsValue> {
        set_panic_hook();
        Board::from_code_string(code)
            .map(|board| JsBoard { board })
            .map_err(to_js_error)
    }

    /// The board code as a decimal string, since it does not fit in a JS number
    #[wasm_bindgen(js_name = toCode)]
    pub fn to_code(&self) -> String {
        self.board.to_code().to_string()
    }

    /// 0 for an empty cell, 1 for player 1 and 2 for player 2
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, x: u32, y: u32) -> u32 {
        match self.board.get_disc_at(x, y) {
            Some(Disc::White) => 1,
            Some(Disc::Red) => 2,
            None => 0,
        }
    }

    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self, x: u32) -> u32 {
        self.board.get_height(x)
    }

    #[wasm_bindgen(js_name = canPlay)]
    pub fn can_play(&self, x: u32) -> bool {
        self.board.can_play(x)
    }

    #[wasm_bindgen]
    pub fn play(&mut self, x: u32) -> Result<(), JsValue> {
        self.board.play(x).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = getPly)]
    pub fn get_ply(&self) -> u32 {
        self.board.ply()
    }

    /// The column of the last move, or undefined for fresh and decoded boards
    #[wasm_bindgen(js_name = getLastColumn)]
    pub fn get_last_column(&self) -> Option<u32> {
        self.board.last_move().map(|last_move| last_move.column)
    }

    /// -1 ongoing, 0 draw, 1 or 2 for the winning player
    #[wasm_bindgen]
    pub fn status(&self) -> i32 {
        self.board.status().code()
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Vec<u32> {
        self.board.legal_moves()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string(&self) -> String {
        self.board.to_string()
    }
}
