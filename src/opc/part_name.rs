//! Well-known part names of a spreadsheet package
//!
//! Part names are absolute paths inside the package. The content types
//! part itself is addressed by its archive entry name.

/// Archive entry holding the content type manifest
pub const CONTENT_TYPES: &str = "[Content_Types].xml";

pub const APP_PROPERTIES: &str = "/docProps/app.xml";
pub const CORE_PROPERTIES: &str = "/docProps/core.xml";
pub const STYLES: &str = "/xl/styles.xml";
pub const THEME: &str = "/xl/theme/theme1.xml";
pub const WORKBOOK: &str = "/xl/workbook.xml";
pub const SHARED_STRINGS: &str = "/xl/sharedStrings.xml";
pub const CALC_CHAIN: &str = "/xl/calcChain.xml";

/// Part name of a worksheet given its file name without extension.
///
/// This is the on-disk name (`sheet1`), not the sheet's display name.
pub fn worksheet(file_name: &str) -> String {
    format!("/xl/worksheets/{}.xml", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worksheet() {
        assert_eq!(worksheet("sheet1"), "/xl/worksheets/sheet1.xml");
        assert_eq!(worksheet("Sheet1"), "/xl/worksheets/Sheet1.xml");
    }
}
