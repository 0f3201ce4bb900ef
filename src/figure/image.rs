//! Decoding of recorded frames into raster images.

use crate::data::Header;
use crate::error::{RdplotError, Result};
use ndarray::{s, Array2, Array3};

/// A frame decoded as an image, rotated by 90 degrees counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    /// Greyscale intensities, `width x height`.
    Grey(Array2<f64>),
    /// RGB pixels, `width x height x 3`.
    Rgb(Array3<u8>),
}

impl Image {
    /// Raster shape as `(rows, cols)`.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Grey(a) => a.dim(),
            Self::Rgb(a) => {
                let (rows, cols, _) = a.dim();
                (rows, cols)
            }
        }
    }
}

/// Decode `frame` as a greyscale or interleaved BGR image of
/// `extent_1 x extent_2` pixels.
pub fn decode_image(header: &Header, frame: &[f64]) -> Result<Image> {
    let (width, height) = match header.extents.as_slice() {
        [w, h, ..] => (*w, *h),
        _ => {
            return Err(RdplotError::NotAnImage {
                len: frame.len(),
                width: header.extent(0).unwrap_or(0),
                height: 0,
            })
        }
    };
    let not_an_image = || RdplotError::NotAnImage {
        len: frame.len(),
        width,
        height,
    };
    let pixels = width.checked_mul(height).ok_or_else(not_an_image)?;

    if pixels > 0 && pixels.checked_mul(3) == Some(frame.len()) {
        // Channels are stored blue, green, red
        let raster = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            to_u8(frame[(y * width + x) * 3 + (2 - c)])
        });
        let rotated = raster.slice(s![.., ..;-1, ..]).permuted_axes([1, 0, 2]).to_owned();
        Ok(Image::Rgb(rotated))
    } else if pixels > 0 && frame.len() == pixels {
        let raster = Array2::from_shape_vec((height, width), frame.to_vec()).map_err(|_| not_an_image())?;
        Ok(Image::Grey(rotate_90(&raster)))
    } else {
        Err(not_an_image())
    }
}

fn rotate_90(raster: &Array2<f64>) -> Array2<f64> {
    raster.slice(s![.., ..;-1]).reversed_axes().to_owned()
}

fn to_u8(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
