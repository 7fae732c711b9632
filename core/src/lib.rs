//! Core contracts of `ajaxful-rating`.
//!
//! This crate defines what a rating widget reads and who it renders for:
//!
//! - [`Rateable`]: the record being rated, owned by the application.
//! - [`Viewer`] and [`UserId`]: who is looking at the widget.
//! - [`RatingOptions`]: typed display options with their defaults.
//! - [`Environment`]: capabilities of the host (current user, routes,
//!   anti-forgery token, translations).
//! - [`RatingError`]: the configuration errors raised before rendering.
//!
//! [`MemoryRateable`] is a complete in-memory [`Rateable`] for tests and demos.

extern crate alloc;

#[macro_use]
mod macros;

pub mod env;
pub mod error;
pub mod memory;
pub mod number;
pub mod options;
pub mod rateable;
pub mod user;

pub use env::{
    CurrentUser, Environment, ForgeryProtection, MessageKey, RateRoutes, RouteTable, Translate,
    rate_route_name,
};
pub use error::RatingError;
pub use memory::MemoryRateable;
pub use number::format_decimal;
pub use options::{HttpMethod, RatingOptions, RemoteOptions};
pub use rateable::{DimensionConfig, Rate, Rateable};
pub use user::{UserId, Viewer};
