pub mod class;
pub mod event;
pub mod registration;
pub mod result;
