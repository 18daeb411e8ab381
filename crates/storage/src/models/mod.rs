mod category;
mod class;
mod event;
mod registration;
mod result;

pub use category::{Category, InvalidCategory};
pub use class::Class;
pub use event::Event;
pub use registration::Registration;
pub use result::{EventResult, SoloPlacing};
