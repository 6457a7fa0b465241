//! Shared wire DTOs for the LearnHub backend REST API.
//!
//! This crate owns the JSON shapes exchanged with the backend: the success
//! envelope, the error body, and the auth, category and user records. It has
//! no transport of its own; the `client` crate sends and receives these types.

pub mod auth;
pub mod category;
pub mod envelope;
pub mod role;
pub mod user;

pub use auth::{
    AuthResponse, EmailRequest, ResetPasswordRequest, SigninRequest, SignupRequest,
};
pub use category::{AddCategoryRequest, Category, UpdateCategoryRequest};
pub use envelope::{ApiEnvelope, ApiErrorBody, ContractsError};
pub use role::Role;
pub use user::{
    AddUserRequest, UpdateProfileRequest, UpdateUserStatusRequest, UserProfile, UserStatus,
};
