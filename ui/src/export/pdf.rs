//! Landscape A4 document wrapping a chart snapshot.

use std::io::Cursor;

use pdf_writer::{Content, Date as PdfDate, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use time::Date;

use crate::core::format::format_date_tr;

use super::ExportError;

pub const PAGE_WIDTH_MM: f64 = 297.0;
pub const PAGE_HEIGHT_MM: f64 = 210.0;
pub const MARGIN_MM: f64 = 10.0;
/// Space kept free under the image for the footer line.
const FOOTER_CLEARANCE_MM: f64 = 20.0;

const FOOTER_FONT_SIZE: f32 = 10.0;
const FOOTER_RGB: (u8, u8, u8) = (148, 163, 184);
const FOOTER_LABEL: &str = "Olusturulma Tarihi";
const PRODUCER: &str = "Heatgrid";

/// Decoded snapshot: 8-bit RGB, alpha already flattened onto white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Bitmap {
    pub fn decode_png(bytes: &[u8]) -> Result<Self, ExportError> {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;

        if info.width == 0 || info.height == 0 {
            return Err(ExportError::EmptyBitmap);
        }
        let pixels = buffer
            .get(..info.buffer_size())
            .ok_or(ExportError::UnsupportedBitmap("truncated frame"))?;

        let rgb = match info.color_type {
            png::ColorType::Rgb => pixels.to_vec(),
            png::ColorType::Rgba => pixels
                .chunks_exact(4)
                .flat_map(|px| {
                    let alpha = px[3];
                    [over_white(px[0], alpha), over_white(px[1], alpha), over_white(px[2], alpha)]
                })
                .collect(),
            png::ColorType::Grayscale => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
            png::ColorType::GrayscaleAlpha => pixels
                .chunks_exact(2)
                .flat_map(|px| {
                    let g = over_white(px[0], px[1]);
                    [g, g, g]
                })
                .collect(),
            png::ColorType::Indexed => {
                return Err(ExportError::UnsupportedBitmap("indexed color"));
            }
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            rgb,
        })
    }
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let blended = (u32::from(channel) * a + 255 * (255 - a) + 127) / 255;
    blended.min(255) as u8
}

/// Image box on the page, in millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fit the page width minus margins, keep the aspect ratio, and shrink if the
/// result would run into the footer.
pub fn place_image(image_width: f64, image_height: f64) -> Placement {
    let max_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let max_height = PAGE_HEIGHT_MM - MARGIN_MM - FOOTER_CLEARANCE_MM;

    let mut width = max_width;
    let mut height = image_height * width / image_width;
    if height > max_height {
        height = max_height;
        width = image_width * height / image_height;
    }

    Placement {
        x: MARGIN_MM,
        y: MARGIN_MM,
        width,
        height,
    }
}

pub fn footer_text(date: Date) -> String {
    format!("{FOOTER_LABEL}: {}", format_date_tr(date))
}

fn mm_to_pt(mm: f64) -> f32 {
    (mm * 72.0 / 25.4) as f32
}

/// Decode `png`, place it on a landscape A4 page and stamp the footer.
pub fn build_pdf(png: &[u8], title: &str, date: Date) -> Result<Vec<u8>, ExportError> {
    let bitmap = Bitmap::decode_png(png)?;
    let placement = place_image(f64::from(bitmap.width), f64::from(bitmap.height));
    let image_width =
        i32::try_from(bitmap.width).map_err(|_| ExportError::UnsupportedBitmap("too wide"))?;
    let image_height =
        i32::try_from(bitmap.height).map_err(|_| ExportError::UnsupportedBitmap("too tall"))?;
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&bitmap.rgb, 6);

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let font_id = Ref::new(5);
    let content_id = Ref::new(6);
    let info_id = Ref::new(7);
    let image_name = Name(b"Im1");
    let font_name = Name(b"F1");

    let page_width = mm_to_pt(PAGE_WIDTH_MM);
    let page_height = mm_to_pt(PAGE_HEIGHT_MM);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, page_width, page_height));
    page.parent(page_tree_id);
    page.contents(content_id);
    let mut resources = page.resources();
    resources.x_objects().pair(image_name, image_id);
    resources.fonts().pair(font_name, font_id);
    resources.finish();
    page.finish();

    let mut image = pdf.image_xobject(image_id, &compressed);
    image.filter(Filter::FlateDecode);
    image.width(image_width);
    image.height(image_height);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    // PDF space is bottom-up.
    let draw_width = mm_to_pt(placement.width);
    let draw_height = mm_to_pt(placement.height);
    let draw_x = mm_to_pt(placement.x);
    let draw_y = page_height - mm_to_pt(placement.y) - draw_height;

    let (r, g, b) = FOOTER_RGB;
    let footer = footer_text(date);

    let mut content = Content::new();
    content.save_state();
    content.transform([draw_width, 0.0, 0.0, draw_height, draw_x, draw_y]);
    content.x_object(image_name);
    content.restore_state();
    content.begin_text();
    content.set_font(font_name, FOOTER_FONT_SIZE);
    content.set_fill_rgb(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    content.next_line(mm_to_pt(MARGIN_MM), mm_to_pt(MARGIN_MM));
    content.show(Str(footer.as_bytes()));
    content.end_text();
    pdf.stream(content_id, &content.finish());

    let mut info = pdf.document_info(info_id);
    info.title(TextStr(title));
    info.producer(TextStr(PRODUCER));
    if let Ok(year) = u16::try_from(date.year()) {
        info.creation_date(PdfDate::new(year).month(u8::from(date.month())).day(date.day()));
    }
    info.finish();

    Ok(pdf.finish())
}
