//! Game session: the secret, the round counter and the win/lose rules

mod session;

pub use session::{GameSession, GameState, Round, Status};
