//! Terminal rendering. Presentation only; no game rule lives here.

mod scene;

pub use scene::render_game;
