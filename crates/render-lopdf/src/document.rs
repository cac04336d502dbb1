use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use placemat_render_core::{RenderError, StandardFont};
use placemat_types::Size;

const PRODUCER: &str = concat!("placemat ", env!("CARGO_PKG_VERSION"));

/// Entries written to the document Info dictionary.
///
/// No creation date is recorded, so identical input yields identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub subject: Option<String>,
}

impl DocumentInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// The name a font is registered under in the page resources.
pub fn font_resource_name(font: StandardFont) -> &'static str {
    match font {
        StandardFont::Helvetica => "F1",
        StandardFont::HelveticaBold => "F2",
    }
}

/// Encodes a PDF text string for the Info dictionary.
///
/// ASCII is written as is, since PDFDocEncoding agrees with it there. Anything else
/// is written as UTF-16BE behind a byte order mark.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Builds a single-page document around an already recorded content stream.
pub(crate) fn assemble(
    page: Size,
    info: &DocumentInfo,
    operations: Vec<Operation>,
) -> Result<Document, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        let font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        let font_id = doc.add_object(font_dict);
        fonts.set(font_resource_name(font), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(page.width as f32),
            Object::Real(page.height as f32),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info_dict = dictionary! { "Producer" => text_string(PRODUCER) };
    if let Some(title) = &info.title {
        info_dict.set("Title", text_string(title));
    }
    if let Some(subject) = &info.subject {
        info_dict.set("Subject", text_string(subject));
    }
    let info_id = doc.add_object(info_dict);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LopdfCanvas;
    use placemat_render_core::{Canvas, PaintMode};
    use placemat_types::{Color, Rect};

    fn sample_bytes(title: &str) -> Vec<u8> {
        let mut canvas = LopdfCanvas::new(Size::new(300.0, 200.0))
            .with_info(DocumentInfo::titled(title));
        canvas.set_fill_color(Color::rgb(0x16, 0x36, 0x5C));
        canvas
            .draw_rect(Rect::new(10.0, 10.0, 50.0, 20.0), PaintMode::Fill)
            .unwrap();
        canvas.set_font(StandardFont::Helvetica, 7.0).unwrap();
        canvas.draw_text(12.0, 15.0, "Résumé ★").unwrap();
        let mut bytes = Vec::new();
        canvas.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_document_round_trips_through_lopdf() {
        let bytes = sample_bytes("Sample");
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box[2].as_float().unwrap(), 300.0);
        assert_eq!(media_box[3].as_float().unwrap(), 200.0);

        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let tj = content
            .operations
            .iter()
            .find(|op| op.operator == "Tj")
            .unwrap();
        assert_eq!(tj.operands[0].as_str().unwrap(), b"R\xe9sum\xe9 *");
    }

    #[test]
    fn test_both_fonts_are_registered() {
        let bytes = sample_bytes("Fonts");
        let doc = Document::load_mem(&bytes).unwrap();
        let mut names: Vec<_> = doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter(|dict| {
                dict.get(b"Type").and_then(|t| t.as_name()).ok() == Some(b"Font".as_slice())
            })
            .map(|dict| dict.get(b"BaseFont").unwrap().as_name().unwrap().to_vec())
            .collect();
        names.sort();
        assert_eq!(names, vec![b"Helvetica".to_vec(), b"Helvetica-Bold".to_vec()]);
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(sample_bytes("Same"), sample_bytes("Same"));
    }

    #[test]
    fn test_title_lands_in_info_dictionary() {
        let bytes = sample_bytes("Placemat");
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Placemat");
    }

    #[test]
    fn test_non_ascii_title_is_utf16() {
        let bytes = sample_bytes("Résumé €");
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        let raw = info.get(b"Title").unwrap().as_str().unwrap();
        assert_eq!(&raw[..2], &[0xFE, 0xFF]);

        let units: Vec<u16> = raw[2..]
            .chunks(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        assert_eq!(String::from_utf16(&units).unwrap(), "Résumé €");
    }
}
