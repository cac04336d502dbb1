use lopdf::content::{Content, Operation};
use lopdf::Document as LopdfDocument;

/// Decoded content stream operators of a page
pub fn page_operations(doc: &LopdfDocument, page_num: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Strings shown with `Tj`, decoded from WinAnsi (Latin-1 for the range the placemat uses)
pub fn shown_strings(doc: &LopdfDocument, page_num: u32) -> Vec<String> {
    page_operations(doc, page_num)
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        .map(|bytes| bytes.iter().map(|&b| b as char).collect())
        .collect()
}

/// Extract font names referenced from page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::HashSet::new();

    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources") else {
            continue;
        };
        // Resources and Font may each be a reference or a direct dictionary
        let resources = match resources.as_reference() {
            Ok(id) => doc.get_dictionary(id).ok(),
            Err(_) => resources.as_dict().ok(),
        };
        let Some(font_dict) = resources.and_then(|r| r.get(b"Font").ok()) else {
            continue;
        };
        let fonts_dict = match font_dict.as_reference() {
            Ok(id) => doc.get_dictionary(id).ok(),
            Err(_) => font_dict.as_dict().ok(),
        };
        let Some(fonts_dict) = fonts_dict else {
            continue;
        };

        for (_name, font_val) in fonts_dict.iter() {
            let font = match font_val.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => font_val.as_dict().ok(),
            };
            if let Some(base_font) = font
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(base_font).to_string());
            }
        }
    }

    fonts.into_iter().collect()
}

/// Page width and height from the MediaBox
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// Deepest `q` nesting reached, or None if a `Q` ever pops an empty stack or
/// the page ends with states still open
pub fn max_state_depth(doc: &LopdfDocument, page_num: u32) -> Option<usize> {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for op in page_operations(doc, page_num) {
        match op.operator.as_str() {
            "q" => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            "Q" => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    (depth == 0).then_some(max_depth)
}

/// Info dictionary text string entry, e.g. `Title`, decoding UTF-16BE when it
/// carries a byte order mark
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let bytes = info.get(key).ok()?.as_str().ok()?;
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(utf16) => {
            let units: Vec<u16> = utf16
                .chunks(2)
                .map(|pair| u16::from_be_bytes([pair[0], *pair.get(1).unwrap_or(&0)]))
                .collect();
            String::from_utf16(&units).ok()
        }
        None => Some(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Assert that the first page shows a string exactly equal to `text`
#[macro_export]
macro_rules! assert_pdf_shows_text {
    ($pdf:expr, $text:expr) => {
        let shown = $crate::common::pdf_assertions::shown_strings(&$pdf.doc, 1);
        assert!(
            shown.iter().any(|s| s == $text),
            "PDF should show '{}', shown strings were:\n{:?}",
            $text,
            shown
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert the size of a page, within a point
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}

/// Assert that every `q` on a page is matched by a `Q`
#[macro_export]
macro_rules! assert_pdf_state_balanced {
    ($pdf:expr, $page:expr) => {
        assert!(
            $crate::common::pdf_assertions::max_state_depth(&$pdf.doc, $page).is_some(),
            "Graphics state stack on page {} is unbalanced",
            $page
        );
    };
}
