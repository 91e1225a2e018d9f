pub mod cars;
pub mod game;
pub mod physics;
pub mod replay;
pub mod scores;
