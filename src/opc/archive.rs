//! Storing the content types part in a ZIP package
//!
//! The archive itself belongs to the package assembler; these helpers
//! only add or read the `[Content_Types].xml` entry.

use crate::error::{Error, Result};
use crate::opc::{part_name, ContentTypes};
use std::io::{Read, Seek, Write};
use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

/// Write the manifest as the `[Content_Types].xml` entry
pub fn write_content_types<W: Write + Seek>(
    content_types: &ContentTypes,
    zip: &mut ZipWriter<W>,
) -> Result<()> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated);

    zip.start_file(part_name::CONTENT_TYPES, options)?;
    content_types.write_to(zip)
}

/// Read the manifest from the `[Content_Types].xml` entry
pub fn read_content_types<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<ContentTypes> {
    let mut file = archive
        .by_name(part_name::CONTENT_TYPES)
        .map_err(|_| Error::MissingPart(part_name::CONTENT_TYPES.into()))?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    ContentTypes::from_xml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_archive_roundtrip() {
        let mut ct = ContentTypes::new();
        ct.add_worksheet("sheet1");
        ct.add_shared_strings();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        write_content_types(&ct, &mut zip).unwrap();
        let cursor = zip.finish().unwrap();

        let mut archive = ZipArchive::new(cursor).unwrap();
        assert!(archive.by_name("[Content_Types].xml").is_ok());

        let ct2 = read_content_types(&mut archive).unwrap();
        assert_eq!(ct, ct2);
    }

    #[test]
    fn test_missing_part() {
        let zip = ZipWriter::new(Cursor::new(Vec::new()));
        let cursor = zip.finish().unwrap();

        let mut archive = ZipArchive::new(cursor).unwrap();
        let err = read_content_types(&mut archive).unwrap_err();
        match err {
            Error::MissingPart(part) => assert_eq!(part, "[Content_Types].xml"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_part_without_types_element() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("[Content_Types].xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<Relationships/>").unwrap();
        let cursor = zip.finish().unwrap();

        let mut archive = ZipArchive::new(cursor).unwrap();
        let err = read_content_types(&mut archive).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }
}
