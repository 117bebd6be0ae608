pub mod entity;
pub mod invariants;

pub use entity::{LoginForm, RegistrationForm};
pub use invariants::{validate_login, validate_registration};
