//! Deterministic PNG reader and writer.
//!
//! Sprites are written as 8-bit RGB with fixed compression settings so the
//! same name always produces byte-identical files. Any 8-bit-or-less PNG
//! color type can be read; it is flattened to RGB, dropping alpha.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Decoder, Encoder, FilterType, Transformations};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Rgb8;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a canvas to an RGB PNG file.
pub fn write_rgb(canvas: &Canvas, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(canvas, writer, config)
}

/// Write a canvas as RGB PNG to any writer.
pub fn write_rgb_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{}",
            canvas.width(),
            canvas.height()
        )));
    }

    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgb8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write RGB to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Read a PNG file into an RGB canvas.
pub fn read_rgb(path: &Path) -> Result<Canvas, PngError> {
    let data = std::fs::read(path)?;
    decode_rgb(&data)
}

/// Decode PNG bytes into an RGB canvas.
pub fn decode_rgb(png_data: &[u8]) -> Result<Canvas, PngError> {
    let mut decoder = Decoder::new(std::io::Cursor::new(png_data));
    // Palette and low bit depths expand to 8 bits; 16-bit samples are truncated.
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(PngError::InvalidDimensions(
                "indexed color was not expanded".into(),
            ))
        }
    };
    if info.bit_depth != BitDepth::Eight {
        return Err(PngError::InvalidDimensions(format!(
            "unsupported bit depth {:?}",
            info.bit_depth
        )));
    }

    let mut canvas = Canvas::new_background(info.width, info.height);
    for y in 0..info.height {
        let row = &buf[y as usize * info.line_size..][..info.width as usize * channels];
        for (x, px) in row.chunks_exact(channels).enumerate() {
            let color = match channels {
                1 | 2 => Rgb8::gray(px[0]),
                _ => Rgb8::from_slice(px),
            };
            canvas.set(x as u32, y, color);
        }
    }

    Ok(canvas)
}
