//! Individual screens.

mod board;
mod loading;
mod menu;
mod summary;

pub use board::BoardScreen;
pub use loading::LoadingScreen;
pub use menu::MenuScreen;
pub use summary::SummaryScreen;
