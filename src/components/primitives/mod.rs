//! Primitive components

pub mod button;
pub mod checkbox;
pub mod icon;
pub mod radio;
pub mod switch;
pub mod text_field;

pub use button::{Button, ButtonSize, ButtonVariant, IconButton, IconButtonVariant};
pub use checkbox::Checkbox;
pub use icon::Icon;
pub use radio::Radio;
pub use switch::Switch;
pub use text_field::{TextField, TextFieldVariant};
