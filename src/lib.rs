//! # linch-xlsx-content-types
//!
//! Builds the content type manifest (`[Content_Types].xml`) of an XLSX
//! package.
//!
//! ## Features
//!
//! - Seeded with the parts every workbook carries
//! - Entries emitted in insertion order, defaults before overrides
//! - Pluggable XML emitter; an unattached sink writes nothing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linch_xlsx_content_types::ContentTypes;
//!
//! let mut ct = ContentTypes::new();
//! ct.add_worksheet("sheet1");
//! ct.add_shared_strings();
//!
//! let xml = ct.to_xml()?;
//! assert!(xml.contains("/xl/worksheets/sheet1.xml"));
//! ```

pub mod error;
pub mod opc;
pub mod xml;

pub use error::{Error, Result};
pub use opc::{ContentTypes, DefaultEntry, OverrideEntry};
pub use xml::{Sink, XmlEmitter, XmlWriter};
