//! Inputs and outputs of the generative content service

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use mime::Mime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output size of a generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "1K" => Ok(ImageSize::OneK),
            "2K" => Ok(ImageSize::TwoK),
            "4K" => Ok(ImageSize::FourK),
            _ => Err(format!("Invalid image size '{}', expected 1K, 2K or 4K", s)),
        }
    }
}

/// Frame shape of a generated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(AspectRatio::Landscape),
            "9:16" => Ok(AspectRatio::Portrait),
            _ => Err(format!("Invalid aspect ratio '{}', expected 16:9 or 9:16", s)),
        }
    }
}

/// Resolution of a generated video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoResolution {
    #[default]
    #[serde(rename = "720p")]
    Hd,
    #[serde(rename = "1080p")]
    FullHd,
}

impl VideoResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoResolution::Hd => "720p",
            VideoResolution::FullHd => "1080p",
        }
    }
}

impl fmt::Display for VideoResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "720p" => Ok(VideoResolution::Hd),
            "1080p" => Ok(VideoResolution::FullHd),
            _ => Err(format!("Invalid resolution '{}', expected 720p or 1080p", s)),
        }
    }
}

/// A media file sent inline with a request
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub mime: Mime,
    pub data: Bytes,
}

impl Attachment {
    pub fn new(mime: Mime, data: impl Into<Bytes>) -> Self {
        Self {
            mime,
            data: data.into(),
        }
    }

    /// Build an attachment, guessing the media type from the file extension
    pub fn from_file(path: &Path, data: impl Into<Bytes>) -> Self {
        Self::new(guess_mime(path), data)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

/// Media type for a file name; `application/octet-stream` when unknown
pub fn guess_mime(path: &Path) -> Mime {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let guessed = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => return mime::APPLICATION_OCTET_STREAM,
    };
    guessed.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

/// Wrap base64 image data as a data URI
pub fn image_data_uri(base64: &str) -> String {
    format!("data:image/png;base64,{}", base64)
}

/// Decode the payload of a `data:...;base64,` URI
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let (_, payload) = uri.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}

/// A downloaded generated video
#[derive(Debug, Clone)]
pub struct VideoAsset {
    /// Where the service stored the video
    pub uri: String,
    pub content_type: Option<Mime>,
    pub bytes: Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_parsing() {
        assert_eq!("2k".parse::<ImageSize>(), Ok(ImageSize::TwoK));
        assert!("8K".parse::<ImageSize>().is_err());
        assert_eq!("9:16".parse::<AspectRatio>(), Ok(AspectRatio::Portrait));
        assert_eq!("1080P".parse::<VideoResolution>(), Ok(VideoResolution::FullHd));
        assert_eq!(
            serde_json::to_string(&ImageSize::FourK).unwrap(),
            "\"4K\""
        );
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("shot.PNG")), mime::IMAGE_PNG);
        assert_eq!(guess_mime(Path::new("clip.mp4")).essence_str(), "video/mp4");
        assert_eq!(guess_mime(Path::new("blob")), mime::APPLICATION_OCTET_STREAM);
    }

    #[test]
    fn test_data_uri() {
        let attachment = Attachment::new(mime::IMAGE_PNG, &b"png!"[..]);
        let uri = image_data_uri(&attachment.to_base64());
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_uri(&uri).unwrap(), b"png!");
        assert_eq!(decode_data_uri("not a data uri"), None);
    }
}
