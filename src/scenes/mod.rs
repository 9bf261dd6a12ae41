//! Concrete scenes: ship select, play and game over.

mod game;
mod game_over;
mod title;

pub use game::GameScene;
pub use game_over::GameOverScene;
pub use title::TitleScene;
