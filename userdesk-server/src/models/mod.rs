//! Domain models with validation at construction
//!
//! Submitted forms are parsed into typed values before any database work.
//! Invalid input returns FormErrors, not panic.

pub mod forms;
pub mod user;
pub mod validation;

pub use forms::{DeleteUserForm, FormFields, UserForm};
pub use user::{NewUser, User};
pub use validation::{FieldError, FormErrors};
