//! Catalog QR codes.

use crate::types::{AppError, Result};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Smallest edge of a rendered code, in pixels.
pub const QR_SIZE: u32 = 256;

/// Renders URLs as PNG QR codes with medium error correction.
#[derive(Debug, Clone, Default)]
pub struct QrService;

impl QrService {
    pub fn new() -> Self {
        Self
    }

    /// Absolute catalog URL for `domain` under `base_url` (no trailing slash needed).
    pub fn catalog_url(base_url: &str, domain: &str) -> String {
        format!("{}/catalog/{}", base_url.trim_end_matches('/'), domain)
    }

    /// Download name for a catalog's QR code.
    pub fn file_name(domain: &str) -> String {
        format!("qr-catalog-{}.png", domain)
    }

    pub fn render_png(&self, data: &str) -> Result<Vec<u8>> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| AppError::Internal(format!("Failed to encode QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(QR_SIZE, QR_SIZE)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| AppError::Internal(format!("Failed to encode PNG: {}", e)))?;

        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_render_png() {
        let png = QrService::new()
            .render_png("http://localhost:8080/catalog/kopi-kenangan")
            .expect("should render");

        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let decoded = image::load_from_memory(&png).expect("should decode");
        assert!(decoded.width() >= QR_SIZE);
        assert_eq!(decoded.width(), decoded.height());
    }

    #[test]
    fn test_catalog_url() {
        assert_eq!(
            QrService::catalog_url("https://toko.example.com/", "warung"),
            "https://toko.example.com/catalog/warung"
        );
        assert_eq!(QrService::file_name("warung"), "qr-catalog-warung.png");
    }
}
