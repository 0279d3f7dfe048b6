use image::imageops;
use ndarray::Array4;

use crate::model::{INPUT_SIZE, ModelError, ModelVariant, Normalization};

/// NHWC f32 batch of one RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Array4<f32>,
}

impl ImageTensor {
    pub fn new(data: Array4<f32>) -> Self {
        Self { data }
    }

    pub fn shape(&self) -> [usize; 4] {
        let dim = self.data.dim();
        [dim.0, dim.1, dim.2, dim.3]
    }

    pub fn array(&self) -> &Array4<f32> {
        &self.data
    }

    /// Contiguous row-major view, `None` only for non-standard layouts.
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.data.as_slice()
    }
}

pub fn preprocess(bytes: &[u8], variant: ModelVariant) -> Result<ImageTensor, ModelError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| ModelError::InvalidImage(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let resized = imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, variant.resize_filter());

    let side = INPUT_SIZE as usize;
    let normalization = variant.normalization();
    let mut data = Array4::<f32>::zeros((1, side, side, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            data[[0, y as usize, x as usize, c]] = normalize(pixel[c], normalization);
        }
    }
    Ok(ImageTensor::new(data))
}

fn normalize(value: u8, normalization: Normalization) -> f32 {
    let v = value as f32;
    match normalization {
        Normalization::Symmetric => v / 127.5 - 1.0,
        Normalization::UnitRange => v / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_spans_minus_one_to_one() {
        assert_eq!(normalize(0, Normalization::Symmetric), -1.0);
        assert_eq!(normalize(255, Normalization::Symmetric), 1.0);
    }

    #[test]
    fn unit_range_spans_zero_to_one() {
        assert_eq!(normalize(0, Normalization::UnitRange), 0.0);
        assert_eq!(normalize(255, Normalization::UnitRange), 1.0);
    }
}
