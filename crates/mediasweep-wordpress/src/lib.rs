//! WPGraphQL client for fetching the media inventory from a WordPress site.

pub mod client;
pub mod error;

pub use client::{MediaFetch, MediaNode, WordPressClient, PAGE_SIZE};
pub use error::{WordPressError, WordPressResult};
