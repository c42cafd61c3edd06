//! Client-side session management and route authorization.
//!
//! LAYERING
//! ========
//! `store` persists the credential pair, `service` is the only writer to it
//! and the only caller of the auth API, `session` owns the shared state
//! machine, and `guard` gates protected routes off that state. Views mutate
//! the session exclusively through [`session::SessionContext`]; going to the
//! service directly would desynchronize the shared view.

pub mod error;
pub mod guard;
pub mod service;
pub mod session;
pub mod store;
