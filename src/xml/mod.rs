//! XML emission primitives and helpers
//!
//! The content-type manifest never writes bytes itself. It drives an
//! [`XmlEmitter`], which owns tag writing, escaping and layout.

mod namespace;
mod writer;

pub use namespace::*;
pub use writer::XmlWriter;

use crate::error::{Error, Result};
use quick_xml::events::BytesStart;

/// Low-level XML emission interface.
///
/// Attributes are written in slice order. Implementations must escape
/// attribute values.
pub trait XmlEmitter {
    /// Write the `<?xml ...?>` declaration
    fn write_declaration(&mut self) -> Result<()>;

    /// Write an opening tag
    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()>;

    /// Write a self-closing tag
    fn empty_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()>;

    /// Write a closing tag
    fn end_tag(&mut self, name: &str) -> Result<()>;

    /// Flush the underlying output.
    ///
    /// Called once, last. The emitter is released right after.
    fn finalize(&mut self) -> Result<()>;
}

impl<E: XmlEmitter + ?Sized> XmlEmitter for &mut E {
    fn write_declaration(&mut self) -> Result<()> {
        (**self).write_declaration()
    }

    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        (**self).start_tag(name, attributes)
    }

    fn empty_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        (**self).empty_tag(name, attributes)
    }

    fn end_tag(&mut self, name: &str) -> Result<()> {
        (**self).end_tag(name)
    }

    fn finalize(&mut self) -> Result<()> {
        (**self).finalize()
    }
}

/// Output target of a serialization.
///
/// An `Unattached` sink turns serialization into a no-op, so a manifest
/// can be built and inspected without any output behind it.
#[derive(Debug)]
pub enum Sink<E> {
    /// No output configured
    Unattached,
    /// Emit through the given emitter
    Attached(E),
}

impl<E> Default for Sink<E> {
    fn default() -> Self {
        Sink::Unattached
    }
}

impl<E> Sink<E> {
    /// Attach an emitter
    pub fn attached(emitter: E) -> Self {
        Sink::Attached(emitter)
    }

    /// Check whether an emitter is attached
    pub fn is_attached(&self) -> bool {
        matches!(self, Sink::Attached(_))
    }

    /// Get the attached emitter mutably
    pub fn emitter_mut(&mut self) -> Option<&mut E> {
        match self {
            Sink::Attached(e) => Some(e),
            Sink::Unattached => None,
        }
    }

    /// Take the attached emitter back
    pub fn into_inner(self) -> Option<E> {
        match self {
            Sink::Attached(e) => Some(e),
            Sink::Unattached => None,
        }
    }
}

/// Get a required attribute value (unescaped) by local name
pub fn get_attr(element: &BytesStart, name: &str) -> Result<String> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(Error::MissingAttribute {
        element: String::from_utf8_lossy(element.name().as_ref()).to_string(),
        attr: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_attr_unescapes() {
        let mut e = BytesStart::new("Default");
        e.push_attribute(("Extension", "a&b"));
        assert_eq!(get_attr(&e, "Extension").unwrap(), "a&b");
    }

    #[test]
    fn test_get_attr_missing() {
        let e = BytesStart::new("Override");
        match get_attr(&e, "PartName") {
            Err(Error::MissingAttribute { element, attr }) => {
                assert_eq!(element, "Override");
                assert_eq!(attr, "PartName");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_sink_states() {
        let mut sink: Sink<XmlWriter<Vec<u8>>> = Sink::default();
        assert!(!sink.is_attached());
        assert!(sink.emitter_mut().is_none());

        let sink = Sink::attached(XmlWriter::new(Vec::new()));
        assert!(sink.is_attached());
        assert!(sink.into_inner().is_some());
    }

    #[test]
    fn test_namespace_constants() {
        assert!(CT.ends_with("/package/2006/content-types"));
    }
}
