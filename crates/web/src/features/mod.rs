pub mod classes;
pub mod events;
pub mod registrations;
pub mod results;
pub mod standings;
