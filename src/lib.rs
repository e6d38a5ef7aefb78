//! Chainable builders for XPath 1.0 query strings.
//!
//! Two cooperating builders: [`XPathHelper`] assembles location-path steps
//! (axis + node test), and [`Filter`] assembles the predicate expressions
//! attached to those steps. Both accumulate pre-rendered string tokens and
//! render on demand; every chaining call returns a new instance, so a
//! partial path can be kept and extended in several directions.
//!
//! ```
//! use xpath_helper::{XPathHelper, filter};
//!
//! let path = XPathHelper::new()
//!     .get_element_by_tag("a", None)
//!     .get_ancestor_by_tag("ul", &filter::get_first());
//! assert_eq!(path.to_string(), "//a/ancestor::ul[1]");
//! ```
//!
//! The rendered string is meant to be handed to any XPath 1.0 engine (DOM
//! `evaluate`, lxml's `.xpath()`, and the like). This crate only builds the
//! query text; it neither parses nor executes XPath.

pub mod filter;
pub mod path;
mod step;
pub mod value;

pub use filter::Filter;
pub use path::{XH, XPathHelper};
pub use value::Value;
