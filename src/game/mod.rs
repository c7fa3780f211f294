// Game layer: the runner character and the session around it

pub mod characters;
pub mod session;

pub use session::{GameSession, Screen};
