//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration and the opaque user profile
//! - [`currency`] - Currency list, exchange rates and conversions
//! - [`transaction`] - Transaction records, creation and paged listings
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "abebe@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "email": "abebe@example.com",
//!     "firstName": "Abebe"
//!   }
//! }
//! ```

pub mod auth;
pub mod currency;
pub mod transaction;

pub use auth::*;
pub use currency::*;
pub use transaction::*;
