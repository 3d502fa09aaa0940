//! Core logic of the navigation shell.
//!
//! This module provides:
//! - [`route`] - Active-section classification of the current path
//! - [`phone`] - Phone number display formatting
//! - [`nav`] - The render model shared by desktop and mobile navbars
//! - [`contacts`] - Contacts retrieval from the backend

pub mod contacts;
pub mod error;
pub mod nav;
pub mod phone;
pub mod route;

pub use nav::NavModel;
pub use route::RouteClassifier;
