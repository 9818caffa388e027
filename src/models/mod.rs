mod request;
mod review;
mod service;

pub use request::{NewRequest, Request, UpdateRequest};
pub use review::{NewReview, Review, UpdateReview};
pub use service::{NewService, Service, UpdateService};
