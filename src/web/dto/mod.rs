//! Request DTOs and form validation for the web surfaces.

pub mod request;
pub mod validation;

pub use request::{
    BnoQuery, DupCheckRequest, JoinForm, LoginForm, ModifyForm, PostForm, RemoveForm,
};
pub use validation::{
    flatten, validate_join_form, validate_modify_form, validate_post_form, FieldErrors,
};
