use crate::errors::AppResult;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::PathBuf;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl CapturedImage {
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/jpeg",
        }
    }

    /// Picks the MIME type from the file signature; anything that is not
    /// a PNG is sent as JPEG, which is what cameras produce.
    pub fn sniff(bytes: Vec<u8>) -> Self {
        let mime = if bytes.starts_with(PNG_MAGIC) {
            "image/png"
        } else {
            "image/jpeg"
        };
        Self { bytes, mime }
    }

    /// `data:image/jpeg;base64,...`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Taken(CapturedImage),
    Canceled,
}

pub trait Camera {
    fn request_permission(&self) -> bool;
    fn capture(&self) -> AppResult<Capture>;
}

/// "Captures" an image file from disk. An empty path means the user
/// backed out of the picker.
pub struct FileCamera {
    path: Option<PathBuf>,
    enabled: bool,
}

impl FileCamera {
    pub fn new(path: Option<PathBuf>, enabled: bool) -> Self {
        Self { path, enabled }
    }
}

impl Camera for FileCamera {
    fn request_permission(&self) -> bool {
        self.enabled
    }

    fn capture(&self) -> AppResult<Capture> {
        match &self.path {
            Some(p) if !p.as_os_str().is_empty() => {
                let bytes = fs::read(p)?;
                Ok(Capture::Taken(CapturedImage::sniff(bytes)))
            }
            _ => Ok(Capture::Canceled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_uses_sniffed_mime() {
        let jpeg = CapturedImage::sniff(vec![0xff, 0xd8, 0xff]);
        assert_eq!(jpeg.to_data_uri(), "data:image/jpeg;base64,/9j/");

        let mut png_bytes = PNG_MAGIC.to_vec();
        png_bytes.push(0);
        assert!(CapturedImage::sniff(png_bytes).to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn empty_path_is_a_cancellation() {
        let cam = FileCamera::new(Some(PathBuf::new()), true);
        assert_eq!(cam.capture().unwrap(), Capture::Canceled);
        let cam = FileCamera::new(None, true);
        assert_eq!(cam.capture().unwrap(), Capture::Canceled);
    }
}
