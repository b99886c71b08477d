mod gallows;

mod game;
pub use game::{Game, State};

mod segment;
pub use segment::LetterUnit;

mod store;
pub use store::{AlreadyInProgress, GameStore, Outcome};
