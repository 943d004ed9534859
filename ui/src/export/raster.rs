//! Raster snapshots of the chart SVG.
//!
//! Native builds render with `resvg` into a `tiny-skia` pixmap. WASM builds
//! load the SVG into an image element and draw it onto an offscreen canvas,
//! which is how the browser produces the PNG.

use base64::Engine;

use crate::chart::palette::Rgb;
use crate::chart::Surface;

use super::ExportError;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// PNG bytes plus the pixel size they were rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterSnapshot {
    pub fn from_data_url(url: &str, width: u32, height: u32) -> Result<Self, ExportError> {
        let payload = url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or_else(|| ExportError::Raster("malformed PNG data URL".into()))?;
        let png = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|err| ExportError::Raster(err.to_string()))?;
        Ok(Self { png, width, height })
    }
}

/// Pixel size of `surface` at `pixel_ratio`, never below 1×1.
pub fn scaled_size(surface: Surface, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let scale = |edge: u32| (f64::from(edge) * ratio).round().clamp(1.0, 16_384.0) as u32;
    (scale(surface.width), scale(surface.height))
}

fn background_rgb(background: &str) -> Rgb {
    Rgb::from_hex(background).unwrap_or(Rgb(255, 255, 255))
}

pub async fn rasterize(
    svg: &str,
    surface: Surface,
    pixel_ratio: f64,
    background: &str,
) -> Result<RasterSnapshot, ExportError> {
    if svg.is_empty() {
        return Err(ExportError::EmptyBitmap);
    }

    #[cfg(target_arch = "wasm32")]
    {
        rasterize_web(svg, surface, pixel_ratio, background).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        rasterize_native(svg, surface, pixel_ratio, background)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_native(
    svg: &str,
    surface: Surface,
    pixel_ratio: f64,
    background: &str,
) -> Result<RasterSnapshot, ExportError> {
    use std::sync::Arc;

    let mut options = usvg::Options::default();
    Arc::make_mut(&mut options.fontdb).load_system_fonts();

    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|err| ExportError::Raster(err.to_string()))?;

    let (width, height) = scaled_size(surface, pixel_ratio);
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(ExportError::EmptyBitmap)?;

    let Rgb(r, g, b) = background_rgb(background);
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    let tree_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / tree_size.width(),
        height as f32 / tree_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| ExportError::Raster(err.to_string()))?;

    Ok(RasterSnapshot { png, width, height })
}

#[cfg(target_arch = "wasm32")]
async fn rasterize_web(
    svg: &str,
    surface: Surface,
    pixel_ratio: f64,
    background: &str,
) -> Result<RasterSnapshot, ExportError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| ExportError::Platform("Unable to build SVG blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| ExportError::Platform("Unable to create SVG URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::Platform("Document unavailable"))?;

    let (width, height) = scaled_size(surface, pixel_ratio);
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ExportError::Platform("Unable to create canvas"))?
        .dyn_into()
        .map_err(|_| ExportError::Platform("Canvas cast failed"))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| ExportError::Platform("Canvas context unavailable"))?
        .ok_or(ExportError::Platform("Canvas context missing"))?
        .dyn_into()
        .map_err(|_| ExportError::Platform("Context cast failed"))?;

    let Rgb(r, g, b) = background_rgb(background);
    context.set_fill_style_str(&format!("rgb({r},{g},{b})"));
    context.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));

    let image =
        HtmlImageElement::new().map_err(|_| ExportError::Platform("Unable to create image"))?;
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;
    Url::revoke_object_url(&url).ok();
    decoded.map_err(|_| ExportError::Raster("SVG image decode failed".into()))?;

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .map_err(|_| ExportError::Platform("Unable to draw image"))?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| ExportError::Platform("Unable to serialise canvas"))?;

    RasterSnapshot::from_data_url(&data_url, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_size_doubles_surface() {
        let surface = Surface {
            width: 960,
            height: 600,
        };
        assert_eq!(scaled_size(surface, 2.0), (1920, 1200));
        assert_eq!(scaled_size(surface, f64::NAN), (960, 600));
    }

    #[test]
    fn canvas_data_url_is_decoded() {
        let snapshot = RasterSnapshot::from_data_url("data:image/png;base64,iVBORw==", 2, 1).unwrap();
        assert_eq!(snapshot.png, vec![0x89, b'P', b'N', b'G']);
        assert_eq!((snapshot.width, snapshot.height), (2, 1));
        assert!(RasterSnapshot::from_data_url("data:text/plain,hi", 1, 1).is_err());
        assert!(RasterSnapshot::from_data_url("data:image/png;base64,%%%", 1, 1).is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_raster_produces_scaled_png() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='200' height='150' viewBox='0 0 200 150'><rect x='150' y='100' width='50' height='50' fill='#a50026'/></svg>";
        let surface = Surface {
            width: 200,
            height: 150,
        };
        let snapshot = rasterize_native(svg, surface, 2.0, "#ffffff").unwrap();
        assert_eq!((snapshot.width, snapshot.height), (400, 300));
        assert_eq!(&snapshot.png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn empty_markup_is_rejected() {
        let surface = Surface {
            width: 10,
            height: 10,
        };
        let result = futures::executor::block_on(rasterize("", surface, 2.0, "#ffffff"));
        assert!(matches!(result, Err(ExportError::EmptyBitmap)));
    }
}
