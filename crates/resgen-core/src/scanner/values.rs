//! String table parsing for `values*/` XML files.
//!
//! Only the flat `<resources>` layout is understood: top-level `string`,
//! `string-array` and `plurals` elements carrying a `name` attribute. The
//! element bodies are not interpreted; the generator only needs the names.

use std::collections::HashSet;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::models::ResourceType;

/// Android value kinds that are valid XML resources but not string tables.
const NON_STRING_KINDS: &[&str] = &[
    "array",
    "attr",
    "bool",
    "color",
    "declare-styleable",
    "dimen",
    "drawable",
    "eat-comment",
    "fraction",
    "id",
    "integer",
    "integer-array",
    "item",
    "public",
    "style",
];

const CONTENT_ERROR: &str = "Check the file content.";

/// One named entry declared in a values file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuesEntry {
    pub resource_type: ResourceType,
    pub name: String,
}

#[derive(Default)]
struct TableBuilder {
    root_seen: bool,
    entries: Vec<ValuesEntry>,
    seen: HashSet<(ResourceType, String)>,
}

impl TableBuilder {
    /// Handle an element opening at `depth` (0 is the document root).
    fn element(&mut self, element: &BytesStart<'_>, depth: usize) -> Result<(), String> {
        let tag = std::str::from_utf8(element.name().as_ref())
            .map_err(|_| CONTENT_ERROR.to_string())?
            .to_string();
        match depth {
            0 if !self.root_seen && tag == "resources" => {
                self.root_seen = true;
                Ok(())
            }
            0 => Err(CONTENT_ERROR.to_string()),
            1 => self.declare(&tag, element),
            _ => Ok(()),
        }
    }

    fn declare(&mut self, tag: &str, element: &BytesStart<'_>) -> Result<(), String> {
        let resource_type = match tag {
            "string" => ResourceType::String,
            "string-array" => ResourceType::StringArray,
            "plurals" => ResourceType::Plurals,
            other if NON_STRING_KINDS.contains(&other) => {
                return Err(format!("Unknown string resource type: '{other}'."))
            }
            other => return Err(format!("Unknown resource type: '{other}'.")),
        };

        let name = element
            .try_get_attribute("name")
            .map_err(|_| CONTENT_ERROR.to_string())?
            .ok_or_else(|| "Attribute 'name' not found.".to_string())?
            .unescape_value()
            .map_err(|_| CONTENT_ERROR.to_string())?
            .into_owned();
        if !self.seen.insert((resource_type, name.clone())) {
            return Err(format!("Duplicated key '{name}'."));
        }
        self.entries.push(ValuesEntry {
            resource_type,
            name,
        });
        Ok(())
    }
}

/// Parse the text of one values file.
///
/// The error string is the reason only; callers prefix the file name.
pub fn parse_values(text: &str) -> Result<Vec<ValuesEntry>, String> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut table = TableBuilder::default();
    let mut depth = 0usize;
    loop {
        let event = reader
            .read_event()
            .map_err(|_| CONTENT_ERROR.to_string())?;
        match event {
            Event::Start(element) => {
                table.element(&element, depth)?;
                depth += 1;
            }
            Event::Empty(element) => table.element(&element, depth)?,
            Event::End(_) => depth = depth.saturating_sub(1),
            // Character data is only allowed inside a declared entry.
            Event::Text(text) if depth < 2 && !text.iter().all(u8::is_ascii_whitespace) => {
                return Err(CONTENT_ERROR.to_string())
            }
            Event::CData(_) if depth < 2 => return Err(CONTENT_ERROR.to_string()),
            Event::Eof => break,
            _ => {}
        }
    }

    if !table.root_seen || depth != 0 {
        return Err(CONTENT_ERROR.to_string());
    }
    Ok(table.entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[ValuesEntry], ty: ResourceType) -> Vec<&str> {
        entries
            .iter()
            .filter(|e| e.resource_type == ty)
            .map(|e| e.name.as_str())
            .collect()
    }

    #[test]
    fn test_parse_all_string_kinds() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <!-- app chrome -->
    <string name="app_name">Demo</string>
    <string name="greeting" translatable="false">Hello, <b>%1$s</b>!</string>
    <string-array name="planets">
        <item>Mercury</item>
        <item>Venus</item>
    </string-array>
    <plurals name="apples">
        <item quantity="one">%d apple</item>
        <item quantity="other">%d apples</item>
    </plurals>
</resources>
"#;
        let entries = parse_values(text).unwrap();
        assert_eq!(
            names(&entries, ResourceType::String),
            vec!["app_name", "greeting"]
        );
        assert_eq!(names(&entries, ResourceType::StringArray), vec!["planets"]);
        assert_eq!(names(&entries, ResourceType::Plurals), vec!["apples"]);
    }

    #[test]
    fn test_single_quoted_and_self_closing() {
        let text = "<resources><string name='empty'/><string name='x'>x</string></resources>";
        let entries = parse_values(text).unwrap();
        assert_eq!(names(&entries, ResourceType::String), vec!["empty", "x"]);
    }

    #[test]
    fn test_empty_resources() {
        assert!(parse_values("<resources/>").unwrap().is_empty());
        assert!(parse_values("<resources>\n</resources>").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_content() {
        assert_eq!(parse_values("").unwrap_err(), "Check the file content.");
        assert_eq!(parse_values("invalid").unwrap_err(), "Check the file content.");
        assert_eq!(
            parse_values("<resources><string name=\"a\">a</resources>").unwrap_err(),
            "Check the file content."
        );
        assert_eq!(
            parse_values("<resources>stray text</resources>").unwrap_err(),
            "Check the file content."
        );
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(
            parse_values(r#"<resources><aaa name="v">aaa</aaa></resources>"#).unwrap_err(),
            "Unknown resource type: 'aaa'."
        );
        assert_eq!(
            parse_values(r#"<resources><drawable name="v">aaa</drawable></resources>"#)
                .unwrap_err(),
            "Unknown string resource type: 'drawable'."
        );
    }

    #[test]
    fn test_duplicated_key() {
        let text = r#"<resources>
    <string name="v1">aaa</string>
    <string name="v2">aaa</string>
    <string name="v3">aaa</string>
    <string name="v1">aaa</string>
</resources>"#;
        assert_eq!(parse_values(text).unwrap_err(), "Duplicated key 'v1'.");
    }

    #[test]
    fn test_same_name_in_different_kinds_is_allowed() {
        let text = r#"<resources>
    <string name="fruit">Fruit</string>
    <plurals name="fruit"><item quantity="other">Fruits</item></plurals>
</resources>"#;
        assert_eq!(parse_values(text).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_name() {
        let text = r#"<resources>
    <string name="v1">aaa</string>
    <string foo="v2">aaa</string>
</resources>"#;
        assert_eq!(parse_values(text).unwrap_err(), "Attribute 'name' not found.");
    }

    #[test]
    fn test_close_tag_with_trailing_whitespace() {
        let entries =
            parse_values(r#"<resources><string name="a">x</string ></resources>"#).unwrap();
        assert_eq!(names(&entries, ResourceType::String), vec!["a"]);
    }

    #[test]
    fn test_cdata_body_is_opaque() {
        let text = r#"<resources>
    <string name="a"><![CDATA[<b>bold</b> and </string>]]></string>
    <string name="b">y</string>
</resources>"#;
        let entries = parse_values(text).unwrap();
        assert_eq!(names(&entries, ResourceType::String), vec!["a", "b"]);
    }

    #[test]
    fn test_doctype_and_prolog_accepted() {
        let text = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE resources>
<resources>
    <string name="title">Title</string>
</resources>
"#;
        let entries = parse_values(text).unwrap();
        assert_eq!(names(&entries, ResourceType::String), vec!["title"]);
    }

    #[test]
    fn test_escaped_name_attribute() {
        let entries =
            parse_values(r#"<resources><string name="a&amp;b">x</string></resources>"#).unwrap();
        assert_eq!(names(&entries, ResourceType::String), vec!["a&b"]);
    }

    #[test]
    fn test_second_root_rejected() {
        assert_eq!(
            parse_values("<resources/><resources/>").unwrap_err(),
            "Check the file content."
        );
        assert_eq!(
            parse_values("<strings><string name=\"a\">a</string></strings>").unwrap_err(),
            "Check the file content."
        );
    }
}
