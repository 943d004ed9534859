//! Handing finished export bytes to the user.

use super::ExportError;

/// Where a delivered file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Browser download was triggered for this filename.
    Download(String),
    /// File was written to disk.
    Saved(std::path::PathBuf),
}

impl Delivery {
    pub fn describe(&self) -> String {
        match self {
            Delivery::Download(name) => format!("{name} indirildi"),
            Delivery::Saved(path) => format!("Kaydedildi: {}", path.display()),
        }
    }
}

/// Where export bytes should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Browser download on WASM, the per-user export directory on native.
    Platform,
    /// A specific directory on disk.
    Directory(std::path::PathBuf),
}

pub async fn deliver(
    destination: &Destination,
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Delivery, ExportError> {
    match destination {
        Destination::Platform => download_bytes(filename, mime, bytes).await,
        Destination::Directory(dir) => write_into(dir, filename, &bytes).map(Delivery::Saved),
    }
}

pub async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Delivery, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Platform("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Platform("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Platform("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Platform("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| ExportError::Platform("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(ExportError::Platform("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(Delivery::Download(filename.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        write_into(&dir, filename, &bytes).map(Delivery::Saved)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Heatgrid", "Heatgrid")
        .ok_or(ExportError::ExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}

fn write_into(
    dir: &std::path::Path,
    filename: &str,
    bytes: &[u8],
) -> Result<std::path::PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    Ok(path)
}
