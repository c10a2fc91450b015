//! quick-xml backed [`XmlEmitter`]

use crate::error::Result;
use crate::xml::XmlEmitter;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Writes XML events to any [`Write`] target.
pub struct XmlWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer that puts every element on its own line,
    /// indented by two spaces per level
    pub fn new(writer: W) -> Self {
        Self::with_indent(writer, b' ', 2)
    }

    /// Create a writer with custom indentation
    pub fn with_indent(writer: W, indent_char: u8, indent_size: usize) -> Self {
        Self {
            inner: Writer::new_with_indent(writer, indent_char, indent_size),
        }
    }

    /// Create a writer that emits everything on a single line
    pub fn compact(writer: W) -> Self {
        Self {
            inner: Writer::new(writer),
        }
    }

    /// Consume the emitter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

fn element<'a>(name: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(name);
    for &attr in attributes {
        elem.push_attribute(attr);
    }
    elem
}

impl<W: Write> XmlEmitter for XmlWriter<W> {
    fn write_declaration(&mut self) -> Result<()> {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), Some("yes"));
        self.inner.write_event(Event::Decl(decl))?;
        Ok(())
    }

    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let elem = element(name, attributes);
        self.inner.write_event(Event::Start(elem))?;
        Ok(())
    }

    fn empty_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let elem = element(name, attributes);
        self.inner.write_event(Event::Empty(elem))?;
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<()> {
        self.inner.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.inner.get_mut().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(mut xml: impl XmlEmitter) {
        xml.write_declaration().unwrap();
        xml.start_tag("Types", &[("xmlns", "urn:test")]).unwrap();
        xml.empty_tag("Default", &[("Extension", "xml"), ("ContentType", "a<b")])
            .unwrap();
        xml.end_tag("Types").unwrap();
        xml.finalize().unwrap();
    }

    #[test]
    fn test_indented_layout() {
        let mut writer = XmlWriter::new(Vec::new());
        sample(&mut writer);

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <Types xmlns=\"urn:test\">\n  \
             <Default Extension=\"xml\" ContentType=\"a&lt;b\"/>\n\
             </Types>"
        );
    }

    #[test]
    fn test_compact_layout() {
        let mut writer = XmlWriter::compact(Vec::new());
        sample(&mut writer);

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <Types xmlns=\"urn:test\">\
             <Default Extension=\"xml\" ContentType=\"a&lt;b\"/>\
             </Types>"
        );
    }

    #[test]
    fn test_attribute_order_kept() {
        let mut writer = XmlWriter::compact(Vec::new());
        writer
            .empty_tag("Override", &[("PartName", "/a.xml"), ("ContentType", "t")])
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "<Override PartName=\"/a.xml\" ContentType=\"t\"/>");
    }
}
