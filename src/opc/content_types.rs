//! Content Types handling for OPC packages
//!
//! Builds, parses and emits `[Content_Types].xml`

use crate::error::{Error, Result};
use crate::opc::part_name;
use crate::xml::{self, Sink, XmlEmitter, XmlWriter};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{BufRead, Write};

/// Extension-keyed content type rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultEntry {
    /// File extension without the leading dot (e.g., "xml")
    pub extension: String,
    /// Content type applied to every part with this extension
    pub content_type: String,
}

/// Part-keyed content type rule, wins over any default
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideEntry {
    /// Absolute part name (e.g., "/xl/workbook.xml")
    pub part_name: String,
    /// Content type of that exact part
    pub content_type: String,
}

/// Content type manifest of a spreadsheet package.
///
/// Entries are kept in the order they were added and emitted in that
/// order, all defaults before all overrides. Duplicate keys are accepted
/// (and logged); see [`ContentTypes::duplicate_keys`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTypes {
    defaults: Vec<DefaultEntry>,
    overrides: Vec<OverrideEntry>,
}

impl ContentTypes {
    /// Create a manifest seeded with the parts every workbook has
    pub fn new() -> Self {
        let mut ct = Self::empty();

        ct.add_default("rels", RELATIONSHIPS);
        ct.add_default("xml", XML);

        ct.add_override(part_name::APP_PROPERTIES, EXTENDED_PROPERTIES);
        ct.add_override(part_name::CORE_PROPERTIES, CORE_PROPERTIES);
        ct.add_override(part_name::STYLES, STYLES);
        ct.add_override(part_name::THEME, THEME);
        ct.add_override(part_name::WORKBOOK, WORKBOOK);

        ct
    }

    /// Create a manifest with no entries at all
    pub fn empty() -> Self {
        Self {
            defaults: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Parse from XML string
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        Self::from_reader(&mut reader)
    }

    /// Parse from a reader, keeping document order.
    ///
    /// Fails with [`Error::InvalidDocument`] when there is no `Types` element.
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut ct = Self::empty();
        let mut has_types = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) => match e.name().local_name().as_ref() {
                    b"Types" => has_types = true,
                    b"Default" => {
                        let ext = xml::get_attr(&e, "Extension")?;
                        let content_type = xml::get_attr(&e, "ContentType")?;
                        ct.add_default(&ext, &content_type);
                    }
                    b"Override" => {
                        let part = xml::get_attr(&e, "PartName")?;
                        let content_type = xml::get_attr(&e, "ContentType")?;
                        ct.add_override(&part, &content_type);
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !has_types {
            return Err(Error::InvalidDocument("missing Types element".into()));
        }

        Ok(ct)
    }

    /// Append a default extension mapping
    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        if self.defaults.iter().any(|d| d.extension == extension) {
            log::warn!("duplicate Default entry for extension '{}'", extension);
        }
        log::trace!("Default {} -> {}", extension, content_type);
        self.defaults.push(DefaultEntry {
            extension: extension.to_string(),
            content_type: content_type.to_string(),
        });
    }

    /// Append an override for a specific part
    pub fn add_override(&mut self, part: &str, content_type: &str) {
        if self.overrides.iter().any(|o| o.part_name == part) {
            log::warn!("duplicate Override entry for part '{}'", part);
        }
        log::trace!("Override {} -> {}", part, content_type);
        self.overrides.push(OverrideEntry {
            part_name: part.to_string(),
            content_type: content_type.to_string(),
        });
    }

    /// Register a worksheet part by its file name inside `xl/worksheets`
    /// (without extension), e.g. "sheet1"
    pub fn add_worksheet(&mut self, sheet_file_name: &str) {
        self.add_override(&part_name::worksheet(sheet_file_name), WORKSHEET);
    }

    /// Register the shared string table
    pub fn add_shared_strings(&mut self) {
        self.add_override(part_name::SHARED_STRINGS, SHARED_STRINGS);
    }

    /// Register the calculation chain
    pub fn add_calc_chain(&mut self) {
        self.add_override(part_name::CALC_CHAIN, CALC_CHAIN);
    }

    /// Default entries in insertion order
    pub fn defaults(&self) -> &[DefaultEntry] {
        &self.defaults
    }

    /// Override entries in insertion order
    pub fn overrides(&self) -> &[OverrideEntry] {
        &self.overrides
    }

    /// Get the content type for a part.
    ///
    /// An override for the exact part wins (the last one if repeated),
    /// otherwise the default for its extension applies.
    pub fn get(&self, part: &str) -> Option<&str> {
        if let Some(o) = self.overrides.iter().rev().find(|o| o.part_name == part) {
            return Some(o.content_type.as_str());
        }

        extension(part).and_then(|ext| {
            self.defaults
                .iter()
                .rev()
                .find(|d| d.extension.eq_ignore_ascii_case(ext))
                .map(|d| d.content_type.as_str())
        })
    }

    /// Keys that appear more than once, extensions first
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();

        for (i, d) in self.defaults.iter().enumerate() {
            let key = d.extension.as_str();
            let seen = self.defaults[..i].iter().any(|e| e.extension == key);
            if seen && !dups.contains(&key) {
                dups.push(key);
            }
        }

        for (i, o) in self.overrides.iter().enumerate() {
            let key = o.part_name.as_str();
            let seen = self.overrides[..i].iter().any(|e| e.part_name == key);
            if seen && !dups.contains(&key) {
                dups.push(key);
            }
        }

        dups
    }

    /// Emit the manifest into `sink` and release it.
    ///
    /// The emitter is taken out of `sink`, which is left unattached, and
    /// handed back once finalized. An unattached sink makes this a no-op
    /// returning `None`. The emitter is finalized even when a write fails;
    /// the first error is returned and the emitter is dropped.
    pub fn serialize<E: XmlEmitter>(&self, sink: &mut Sink<E>) -> Result<Option<E>> {
        let Some(mut emitter) = std::mem::take(sink).into_inner() else {
            log::debug!("content types sink unattached, nothing written");
            return Ok(None);
        };

        log::debug!(
            "writing content types: {} defaults, {} overrides",
            self.defaults.len(),
            self.overrides.len()
        );

        let written = self.emit(&mut emitter);
        let finalized = emitter.finalize();
        written.and(finalized)?;

        Ok(Some(emitter))
    }

    fn emit<E: XmlEmitter>(&self, out: &mut E) -> Result<()> {
        out.write_declaration()?;
        out.start_tag("Types", &[("xmlns", xml::CT)])?;

        for d in &self.defaults {
            out.empty_tag(
                "Default",
                &[
                    ("Extension", d.extension.as_str()),
                    ("ContentType", d.content_type.as_str()),
                ],
            )?;
        }

        for o in &self.overrides {
            out.empty_tag(
                "Override",
                &[
                    ("PartName", o.part_name.as_str()),
                    ("ContentType", o.content_type.as_str()),
                ],
            )?;
        }

        out.end_tag("Types")
    }

    /// Write indented XML to a writer
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        self.serialize(&mut Sink::attached(XmlWriter::new(writer)))?;
        Ok(())
    }

    /// Serialize to XML string
    pub fn to_xml(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension of the last path segment, if any
fn extension(part: &str) -> Option<&str> {
    let file_name = part.rsplit('/').next()?;
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

// Well-known content types
pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const EXTENDED_PROPERTIES: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";
pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";
pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
pub const WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
pub const WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
pub const SHARED_STRINGS: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml";
pub const CALC_CHAIN: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.calcChain+xml";
