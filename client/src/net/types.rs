//! Wire DTOs used by the service modules.
//!
//! The shapes live in the `contracts` crate; this module re-exports them so
//! pages and state depend on `crate::net::types` only.

pub use contracts::{
    AddCategoryRequest, AddUserRequest, ApiEnvelope, AuthResponse, Category, EmailRequest,
    ResetPasswordRequest, Role, SigninRequest, SignupRequest, UpdateCategoryRequest,
    UpdateProfileRequest, UpdateUserStatusRequest, UserProfile, UserStatus,
};

/// Envelope of endpoints that acknowledge without a typed payload.
pub type Acknowledgement = ApiEnvelope<serde_json::Value>;
