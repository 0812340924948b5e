//! Eros Site - the storefront page as data.
//!
//! The page is one scrolling document split into anchored sections. Header,
//! footer and calls to action navigate by anchor; an anchor that matches no
//! section does nothing.
//!
//! # Example
//!
//! ```rust
//! use eros_site::Page;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = Page::standard()?;
//! let contact = page.resolve("#contato").expect("contact section");
//! assert_eq!(contact.title, "Contato");
//! assert!(page.resolve("#nowhere").is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod content;
pub mod page;

// Re-export commonly used types
pub use content::{Benefit, Category, ContactInfo, Stat};
pub use page::{NavLink, Page, Section, SectionKind};
