use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;

const SVG_PREFIX: &str = "data:image/svg+xml;base64,";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("not an SVG data URI")]
    NotSvgDataUri,
    #[error("invalid base64 payload")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// An SVG document inlined as a base64 `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    pub fn for_svg(svg: &str) -> Self {
        DataUri(format!("{}{}", SVG_PREFIX, BASE64.encode(svg.as_bytes())))
    }

    pub fn parse(uri: &str) -> Result<Self, DecodeError> {
        let data_uri = DataUri(uri.to_owned());
        data_uri.payload()?;
        Ok(data_uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<String, DecodeError> {
        let bytes = BASE64.decode(self.payload()?)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn payload(&self) -> Result<&str, DecodeError> {
        self.0
            .strip_prefix(SVG_PREFIX)
            .ok_or(DecodeError::NotSvgDataUri)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ICONS;

    #[test]
    fn should_decode_to_original_svg() {
        for icon in &ICONS {
            let svg = icon.svg();
            let data_uri = DataUri::for_svg(&svg);
            assert_eq!(data_uri.decode().unwrap(), svg);
        }
    }

    #[test]
    fn should_encode_with_padding() {
        let data_uri = DataUri::for_svg("<svg/>");
        assert_eq!(data_uri.as_str(), "data:image/svg+xml;base64,PHN2Zy8+");

        let data_uri = DataUri::for_svg("<g/>");
        assert_eq!(data_uri.as_str(), "data:image/svg+xml;base64,PGcvPg==");
    }

    #[test]
    fn should_encode_non_ascii_text_as_utf8() {
        let data_uri = DataUri::for_svg("🎈");
        assert_eq!(data_uri.as_str(), "data:image/svg+xml;base64,8J+OiA==");
        assert_eq!(data_uri.decode().unwrap(), "🎈");
    }

    #[test]
    fn should_reject_other_media_types() {
        let result = DataUri::parse("data:image/png;base64,PHN2Zy8+");
        assert!(matches!(result, Err(DecodeError::NotSvgDataUri)));
    }

    #[test]
    fn should_reject_invalid_base64() {
        let result = DataUri::parse("data:image/svg+xml;base64,not base64!")
            .unwrap()
            .decode();
        assert!(matches!(result, Err(DecodeError::Base64(_))));
    }
}
