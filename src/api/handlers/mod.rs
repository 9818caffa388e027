//! HTTP request handlers.

pub mod home;
pub mod requests;
pub mod reviews;
pub mod services;
