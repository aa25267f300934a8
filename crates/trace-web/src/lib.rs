pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Expands to:
/// - `thread_local!` storage for the GameRunner
/// - a `with_runner()` helper
/// - the wasm-bindgen exports (init, tick, input, manifest/settings, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use trace_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// trace_web::export_game!(MyGame, "my-game");
/// ```
///
/// `$game_type` must implement `trace_engine::Game` and provide `new()`.
/// `$game_name` only appears in log output.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_load_settings(json: &str) {
            with_runner(|r| r.load_settings(json));
        }

        $crate::export_accessors! {
            // frame data
            get_header_ptr => header_ptr: *const f32,
            get_instances_ptr => instances_ptr: *const f32,
            get_instance_count => instance_count: u32,
            get_atlas_split => atlas_split: u32,
            get_effects_ptr => effects_ptr: *const f32,
            get_effects_vertex_count => effects_vertex_count: u32,
            get_audio_commands_ptr => audio_commands_ptr: *const f32,
            get_audio_commands_len => audio_commands_len: u32,
            get_game_events_ptr => game_events_ptr: *const f32,
            get_game_events_len => game_events_len: u32,
            get_world_width => world_width: f32,
            get_world_height => world_height: f32,
            // capacities
            get_max_instances => max_instances: u32,
            get_max_effects_vertices => max_effects_vertices: u32,
            get_max_audio_commands => max_audio_commands: u32,
            get_max_events => max_events: u32,
            get_buffer_total_floats => buffer_total_floats: u32,
        }
    };
}

/// One `#[wasm_bindgen]` getter per `export => runner_method: Type` entry.
/// Expanded inside `export_game!`, where `with_runner` is in scope.
#[doc(hidden)]
#[macro_export]
macro_rules! export_accessors {
    ($($export:ident => $method:ident: $ret:ty),* $(,)?) => {
        $(
            #[wasm_bindgen]
            pub fn $export() -> $ret {
                with_runner(|r| r.$method())
            }
        )*
    };
}
