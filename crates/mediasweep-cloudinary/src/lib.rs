//! Cloudinary Admin API client for listing and deleting stored resources.

pub mod client;
pub mod error;

pub use client::{
    CloudinaryClient, CloudinaryCredentials, DeleteResponse, Resource, ResourceListing,
    DELETE_BATCH_SIZE, MAX_LIST_RESULTS,
};
pub use error::{CloudinaryError, CloudinaryResult};
