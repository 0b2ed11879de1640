pub mod progression;
pub mod roster;
