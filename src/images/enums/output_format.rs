use mime::Mime;

#[non_exhaustive]
pub struct OutputFormat;

impl OutputFormat {
    pub const WEBP: &str = "webp";
    pub const JPG: &str = "jpg";
    pub const PNG: &str = "png";

    pub const ALL: [&str; 3] = [Self::WEBP, Self::JPG, Self::PNG];

    pub fn is_supported(output_format: &str) -> bool {
        Self::ALL.contains(&output_format)
    }

    pub fn mime_type(output_format: &str) -> Option<Mime> {
        match output_format {
            Self::WEBP => "image/webp".parse().ok(),
            Self::JPG => Some(mime::IMAGE_JPEG),
            Self::PNG => Some(mime::IMAGE_PNG),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_for_supported_formats() {
        assert_eq!(
            OutputFormat::mime_type(OutputFormat::JPG),
            Some(mime::IMAGE_JPEG)
        );
        assert_eq!(
            OutputFormat::mime_type(OutputFormat::WEBP).unwrap().to_string(),
            "image/webp"
        );
        assert_eq!(OutputFormat::mime_type("gif"), None);
    }
}
