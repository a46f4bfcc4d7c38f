//! This module serves as a container for the reusable UI components of the
//! catalog page.
//!
//! Each sub-module defines a specific UI element, such as the header, the
//! product card, or the image loading wrapper.

pub mod error_template;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loader;
pub mod product_card;
pub mod product_image;
