//! In-memory PNG encoding of `height x width [x channels]` arrays.

use std::convert::TryFrom;

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{Error, Result};
use crate::proto::tensorboard as pb;

/// An element type that can be turned into an 8-bit sample.
///
/// Integer pixels are taken as-is. Float pixels are expected in `[0, 1]`,
/// except for single-channel images, which are rescaled so the darkest sample
/// maps to black and the brightest to white.
pub trait Pixel: Copy {
    const IS_FLOAT: bool;

    fn to_f64(self) -> f64;
}

impl Pixel for u8 {
    const IS_FLOAT: bool = false;

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Pixel for f32 {
    const IS_FLOAT: bool = true;

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Pixel for f64 {
    const IS_FLOAT: bool = true;

    fn to_f64(self) -> f64 {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub height: u32,
    pub width: u32,
    pub channels: u8,
    pub png: Vec<u8>,
}

impl EncodedImage {
    /// The `Summary.Image` colorspace codes coincide with channel counts for
    /// grayscale, grayscale+alpha, RGB and RGBA.
    pub fn into_proto(self) -> pb::summary::Image {
        pb::summary::Image {
            height: self.height as i32,
            width: self.width as i32,
            colorspace: self.channels as i32,
            encoded_image_string: self.png,
        }
    }
}

pub fn encode_png<S, D>(image: &ArrayBase<S, D>) -> Result<EncodedImage>
where
    S: Data,
    S::Elem: Pixel,
    D: Dimension,
{
    let shape = image.shape();
    let (height, width, channels) = match shape {
        &[h, w] => (h, w, 1),
        &[h, w, c] => (h, w, c),
        [] | [_] => {
            return Err(Error::image_shape(
                shape,
                "expected at least height and width dimensions",
            ))
        }
        _ => return Err(Error::image_shape(shape, "too many dimensions")),
    };
    let color = match channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        _ => return Err(Error::image_shape(shape, "channel count must be 1 to 4")),
    };
    if height == 0 || width == 0 {
        return Err(Error::image_shape(shape, "image is empty"));
    }
    let too_large = || Error::image_shape(shape, "dimension does not fit in i32");
    let height = u32::try_from(height)
        .ok()
        .filter(|&h| h <= i32::MAX as u32)
        .ok_or_else(too_large)?;
    let width = u32::try_from(width)
        .ok()
        .filter(|&w| w <= i32::MAX as u32)
        .ok_or_else(too_large)?;

    let samples = to_samples(image, channels);

    let mut png_bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_bytes, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&samples)?;
        writer.finish()?;
    }
    tracing::trace!(height, width, channels, bytes = png_bytes.len(), "encoded png");

    Ok(EncodedImage {
        height,
        width,
        channels: channels as u8,
        png: png_bytes,
    })
}

/// Encodes every image, failing on the first malformed one.
pub fn encode_all<S, D>(images: &[ArrayBase<S, D>]) -> Result<Vec<EncodedImage>>
where
    S: Data,
    S::Elem: Pixel,
    D: Dimension,
{
    images.iter().map(encode_png).collect()
}

fn to_samples<S, D>(image: &ArrayBase<S, D>, channels: usize) -> Vec<u8>
where
    S: Data,
    S::Elem: Pixel,
    D: Dimension,
{
    let values = image.iter().map(|p| p.to_f64());
    if !<S::Elem as Pixel>::IS_FLOAT {
        return values.map(|v| v as u8).collect();
    }
    if channels != 1 {
        return values.map(quantize).collect();
    }
    let (lo, hi) = image
        .iter()
        .map(|p| p.to_f64())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;
    values
        .map(|v| {
            if range > 0.0 {
                quantize((v - lo) / range)
            } else {
                0
            }
        })
        .collect()
}

/// Maps `[0, 1]` onto `0..=255`; out-of-range values saturate and NaN is 0.
fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
