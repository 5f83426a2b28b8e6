//! Assembled palette documents.

use std::fmt;

use sha2::Digest;

use palette_model::{SectionId, TemplateSet};

/// Opening line of every palette document.
pub const ENVELOPE_OPEN: &str = r#"<xml style="display: none">"#;

/// Closing line of every palette document.
pub const ENVELOPE_CLOSE: &str = "</xml>";

/// Where a section's markup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Rendered by the library with the given template set.
    Library(TemplateSet),
    /// A caller override replacing a required section.
    Override,
    /// A caller section outside the required ordering, appended at the end.
    Extension,
}

/// One entry of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Section {
        id: SectionId,
        origin: Origin,
        markup: String,
    },
    Separator,
}

/// An assembled palette: envelope, sections and separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    parts: Vec<Part>,
    separator: String,
}

impl Document {
    pub(crate) fn new(parts: Vec<Part>, separator: String) -> Self {
        Self { parts, separator }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Markup used for every separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn separator_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Separator))
            .count()
    }

    /// Section ids in output order.
    pub fn section_ids(&self) -> Vec<&SectionId> {
        self.sections().map(|(id, _, _)| id).collect()
    }

    /// Markup of the first section with `id`.
    pub fn section(&self, id: &str) -> Option<&str> {
        self.sections()
            .find(|(section, _, _)| section.as_str() == id)
            .map(|(_, _, markup)| markup)
    }

    pub fn origin(&self, id: &str) -> Option<Origin> {
        self.sections()
            .find(|(section, _, _)| section.as_str() == id)
            .map(|(_, origin, _)| origin)
    }

    fn sections(&self) -> impl Iterator<Item = (&SectionId, Origin, &str)> {
        self.parts.iter().filter_map(|part| match part {
            Part::Section { id, origin, markup } => Some((id, *origin, markup.as_str())),
            Part::Separator => None,
        })
    }

    /// Serialized document: envelope and parts joined by newlines.
    pub fn render(&self) -> String {
        let mut lines: Vec<&str> = Vec::with_capacity(self.parts.len() + 2);
        lines.push(ENVELOPE_OPEN);
        for part in &self.parts {
            lines.push(match part {
                Part::Section { markup, .. } => markup,
                Part::Separator => &self.separator,
            });
        }
        lines.push(ENVELOPE_CLOSE);
        lines.join("\n")
    }

    /// SHA-256 of the rendered document, hex encoded.
    ///
    /// Equal inputs produce equal documents, so consumers can key parsed
    /// palettes by this value.
    pub fn digest(&self) -> String {
        hex::encode(sha2::Sha256::digest(self.render().as_bytes()))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, markup: &str) -> Part {
        Part::Section {
            id: SectionId::from(id),
            origin: Origin::Override,
            markup: markup.to_string(),
        }
    }

    #[test]
    fn render_wraps_parts_in_envelope() {
        let document = Document::new(
            vec![section("a", "<a/>"), Part::Separator, section("b", "<b/>")],
            "<sep/>".to_string(),
        );
        assert_eq!(
            document.render(),
            "<xml style=\"display: none\">\n<a/>\n<sep/>\n<b/>\n</xml>"
        );
        assert_eq!(document.to_string(), document.render());
        assert_eq!(document.separator_count(), 1);
    }

    #[test]
    fn empty_document_is_just_the_envelope() {
        let document = Document::new(Vec::new(), "<sep/>".to_string());
        assert_eq!(document.render(), "<xml style=\"display: none\">\n</xml>");
    }

    #[test]
    fn digest_is_sha256_hex() {
        let document = Document::new(vec![section("a", "<a/>")], "<sep/>".to_string());
        let digest = document.digest();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, document.clone().digest());
    }
}
