// Licensed under the Apache-2.0 license

//! Code generators for register maps.
//!
//! This crate renders a [`regmap_ir::RegisterList`] into textual target
//! artifacts. Generators borrow the list as an immutable snapshot and own
//! no state of their own; rendering the same snapshot twice is
//! byte-identical except for the provenance timestamp.
//!
//! ```
//! use regmap_ir::RegisterList;
//! use regmap_generator::{HtmlGenerator, VhdlGenerator};
//!
//! let mut registers = RegisterList::new("sensor");
//! registers.append("conf", "r_w").unwrap();
//!
//! let package = VhdlGenerator::new(&registers).get_package();
//! let page = HtmlGenerator::new(&registers).get_page();
//! ```
//!
//! ## Module Organization
//!
//! - [`vhdl`]: VHDL constant package backend
//! - [`html`]: HTML documentation backend (table and full page)
//! - [`markdown`]: Inline-markup translation for descriptions
//! - [`meta`]: Provenance metadata (generation notice, revision, timestamp)
//!
//! Writing the rendered text to storage and choosing file names is the
//! caller's responsibility.

pub mod html;
pub mod markdown;
pub mod meta;
pub mod vhdl;


pub use html::HtmlGenerator;
pub use vhdl::VhdlGenerator;
