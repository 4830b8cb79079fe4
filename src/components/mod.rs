//! Concrete component models: the shared field base plus one model per
//! registered component type.

pub mod field;
pub mod form_container;
pub mod number_input;
pub mod panel;

pub use field::FieldBase;
pub use form_container::FormContainer;
pub use number_input::NumberInput;
pub use panel::Panel;
