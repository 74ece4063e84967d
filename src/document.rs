//! Character sheet PDF: a centered title followed by one line per field.
//!
//! Layout follows a Letter page with one-inch margins. Text uses the built-in
//! Helvetica face, so no font files are embedded; widths are estimated from an
//! average glyph width to center the title and wrap long values.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::AppError;
use crate::model::CharacterSheet;

pub const TITLE: &str = "Ficha del Personaje";
pub const CONTENT_TYPE: &str = "application/pdf";

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 72.0;
const TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 14.0;
const LINE_SPACING: f32 = 1.2;
/// Mean Helvetica advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Attachment filename for a sheet with this id.
pub fn file_name(id: &str) -> String {
    format!("personaje_{}.pdf", id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub size: f32,
    pub centered: bool,
}

impl Line {
    fn body(text: String) -> Self {
        Line { text, size: BODY_SIZE, centered: false }
    }

    fn height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

fn max_chars(size: f32) -> usize {
    ((PAGE_WIDTH_PT - 2.0 * MARGIN_PT) / (size * AVG_GLYPH_WIDTH)) as usize
}

/// Greedy word wrap to at most `width` characters per line; overlong words are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lines of the sheet in reading order: title, a blank line, then the labelled fields.
pub fn layout(id: &str, sheet: &CharacterSheet) -> Vec<Line> {
    let f = &sheet.fields;
    let value = |v: &Option<String>| v.clone().unwrap_or_default();
    let mut lines = vec![
        Line { text: TITLE.to_string(), size: TITLE_SIZE, centered: true },
        Line::body(String::new()),
    ];
    let labelled = [
        format!("ID: {}", id),
        format!("Nombre: {}", value(&f.nombre)),
        format!("Casa: {}", value(&f.casa)),
        format!("Descripción: {}", value(&f.descripcion)),
        format!("Rol: {}", value(&f.rol)),
    ];
    for text in labelled {
        lines.extend(wrap(&text, max_chars(BODY_SIZE)).into_iter().map(Line::body));
    }
    lines
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn new_page(doc: &PdfDocumentReference) -> Self {
        let (page, layer) = doc.add_page(mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), "Contenido");
        Cursor {
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT_PT - MARGIN_PT,
        }
    }
}

fn write_line(cursor: &mut Cursor, line: &Line, font: &IndirectFontRef) {
    cursor.y -= line.height();
    let x = if line.centered {
        let width = line.text.chars().count() as f32 * line.size * AVG_GLYPH_WIDTH;
        ((PAGE_WIDTH_PT - width) / 2.0).max(MARGIN_PT)
    } else {
        MARGIN_PT
    };
    if !line.text.is_empty() {
        cursor.layer.use_text(line.text.clone(), line.size, mm(x), mm(cursor.y), font);
    }
}

/// Render the sheet to PDF bytes. `id` must already have passed the presence check.
pub fn render_character_sheet(id: &str, sheet: &CharacterSheet) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) =
        PdfDocument::new(TITLE, mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), "Contenido");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Document(format!("{:?}", e)))?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_PT - MARGIN_PT,
    };
    for line in layout(id, sheet) {
        if cursor.y - line.height() < MARGIN_PT {
            cursor = Cursor::new_page(&doc);
        }
        write_line(&mut cursor, &line, &font);
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| AppError::Document(format!("{:?}", e)))?;
    tracing::debug!(id, bytes = bytes.len(), "rendered character sheet");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CharacterFields;

    fn sheet(descripcion: &str) -> CharacterSheet {
        CharacterSheet {
            id: Some(serde_json::json!(1)),
            fields: CharacterFields {
                nombre: Some("Harry Potter".into()),
                casa: Some("Gryffindor".into()),
                descripcion: Some(descripcion.into()),
                rol: Some("Protagonist".into()),
            },
        }
    }

    #[test]
    fn layout_is_title_blank_then_fields() {
        let lines = layout("1", &sheet("The Boy Who Lived"));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Ficha del Personaje",
                "",
                "ID: 1",
                "Nombre: Harry Potter",
                "Casa: Gryffindor",
                "Descripción: The Boy Who Lived",
                "Rol: Protagonist",
            ]
        );
        assert!(lines[0].centered);
        assert_eq!(lines[0].size, 20.0);
        assert!(lines[2..].iter().all(|l| l.size == 14.0 && !l.centered));
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("uno dos tres", 7), vec!["uno dos", "tres"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_splits_words_longer_than_a_line() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn long_descriptions_wrap_within_margins() {
        let long = "word ".repeat(200);
        let lines = layout("1", &sheet(&long));
        let limit = max_chars(BODY_SIZE);
        assert!(lines.len() > 7);
        assert!(lines.iter().all(|l| l.text.chars().count() <= limit));
    }

    #[test]
    fn rendered_bytes_are_a_pdf() {
        let bytes = render_character_sheet("1", &sheet("The Boy Who Lived")).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn overflowing_sheets_still_render() {
        let long = "Lorem ipsum dolor sit amet ".repeat(400);
        let bytes = render_character_sheet("9", &sheet(&long)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn file_name_embeds_id() {
        assert_eq!(file_name("42"), "personaje_42.pdf");
    }
}
