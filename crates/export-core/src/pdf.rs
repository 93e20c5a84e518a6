//! Single-page A4 PDF assembly
//!
//! The exported document is one A4 portrait page carrying the
//! rasterized preview as an image XObject. The image spans the full
//! page width; its height follows the bitmap aspect ratio and the
//! image sits at the top of the page.

use lopdf::{Dictionary, Document, Object, Stream};

use crate::error::ExportError;
use crate::raster::Bitmap;

/// A4 portrait in PDF points (1/72 inch).
pub const A4_WIDTH_PT: f64 = 595.28;
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Build the complete PDF byte stream for one bitmap.
pub fn assemble_pdf(bitmap: &Bitmap) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    // Image XObject: raw RGB8, compressed on save.
    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(i64::from(bitmap.width())));
    image_dict.set("Height", Object::Integer(i64::from(bitmap.height())));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    let image_id = doc.add_object(Object::Stream(Stream::new(
        image_dict,
        bitmap.pixels().to_vec(),
    )));

    // Full page width, height from the bitmap aspect, anchored at the
    // top of the page (PDF origin is bottom-left).
    let image_width = A4_WIDTH_PT;
    let image_height = image_width * bitmap.aspect_ratio();
    let image_y = A4_HEIGHT_PT - image_height;

    let content = format!(
        "q {:.2} 0 0 {:.2} 0 {:.2} cm /Im0 Do Q",
        image_width, image_height, image_y
    );
    let content_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        content.into_bytes(),
    )));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(A4_WIDTH_PT as f32),
            Object::Real(A4_HEIGHT_PT as f32),
        ]),
    );
    let page_id = doc.add_object(Object::Dictionary(page_dict));

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(vec![Object::Reference(page_id)]));
    pages_dict.set("Count", Object::Integer(1));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog_dict.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog_dict));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::PdfAssembly(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembled_pdf_has_exactly_one_a4_page() {
        let bitmap = Bitmap::solid(21, 29, [0xff; 3]).unwrap();
        let bytes = assemble_pdf(&bitmap).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn page_media_box_is_a4_portrait() {
        let bitmap = Bitmap::solid(50, 50, [0x80; 3]).unwrap();
        let bytes = assemble_pdf(&bitmap).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let (&page_num, &page_id) = doc.get_pages().iter().next().unwrap();
        assert_eq!(page_num, 1);
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let dims: Vec<f32> = media_box
            .iter()
            .map(|object| match object {
                Object::Integer(v) => *v as f32,
                Object::Real(v) => *v,
                other => panic!("unexpected media box entry: {:?}", other),
            })
            .collect();
        assert_eq!(dims.len(), 4);
        assert!((dims[2] - A4_WIDTH_PT as f32).abs() < 0.01);
        assert!((dims[3] - A4_HEIGHT_PT as f32).abs() < 0.01);
    }

    #[test]
    fn content_stream_places_image_at_page_top() {
        let bitmap = Bitmap::solid(100, 141, [0xff; 3]).unwrap();
        let image_height = A4_WIDTH_PT * bitmap.aspect_ratio();
        let image_y = A4_HEIGHT_PT - image_height;
        // Taller-than-wide bitmaps still hang from the top edge.
        assert!(image_y < A4_HEIGHT_PT);
        assert!(image_height <= A4_HEIGHT_PT);
        assert!(assemble_pdf(&bitmap).is_ok());
    }
}
