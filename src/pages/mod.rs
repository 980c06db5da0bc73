//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form state, submit
//! handlers) and delegates shared rendering to `components`. Session
//! mutations always go through the session store operations.

pub mod create_event;
pub mod edit_profile;
pub mod events;
pub mod login;
pub mod map;
pub mod notifications;
pub mod profile;
pub mod register;
