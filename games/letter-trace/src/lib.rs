use wasm_bindgen::prelude::*;
use trace_engine::*;

mod assets;
mod celebration;
mod dot;
mod game;
mod hand_prompt;
mod layout;
mod menu;
mod music;
mod segments;
mod settings;
mod trace_input;
use game::LetterTrace;

trace_web::export_game!(LetterTrace, "letter-trace");
