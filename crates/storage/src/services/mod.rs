pub mod outcome;
pub mod roster;
pub mod standings;
