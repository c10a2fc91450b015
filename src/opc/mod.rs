//! Open Packaging Convention (OPC) pieces of a spreadsheet package
//!
//! This module builds the content type manifest and stores it in the
//! ZIP container.

pub mod archive;
mod content_types;
pub mod part_name;

pub use content_types::{
    ContentTypes, DefaultEntry, OverrideEntry, CALC_CHAIN, CORE_PROPERTIES, EXTENDED_PROPERTIES,
    RELATIONSHIPS, SHARED_STRINGS, STYLES, THEME, WORKBOOK, WORKSHEET, XML,
};
