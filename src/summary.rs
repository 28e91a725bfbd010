use ndarray::{ArrayBase, Data, Dimension};

use super::proto::tensorboard as pb;
use crate::error::Result;
use crate::histogram::histogram;
use crate::image::{encode_all, EncodedImage, Pixel};
use pb::summary::value::Value as InnerValue;

#[derive(Default)]
pub struct SummaryBuilder {
    summary: pb::Summary,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> pb::Summary {
        self.summary
    }

    pub fn value(mut self, value: pb::summary::Value) -> Self {
        self.summary.value.push(value);
        self
    }

    fn tag_and_inner_value(self, tag: &str, inner: InnerValue) -> Self {
        let mut outer = pb::summary::Value::default();
        outer.tag = tag.to_string();
        outer.value = Some(inner);
        self.value(outer)
    }

    pub fn scalar(self, tag: &str, scalar: f32) -> Self {
        self.tag_and_inner_value(tag, InnerValue::SimpleValue(scalar))
    }

    /// Adds an already encoded image.
    pub fn image(self, tag: &str, image: pb::summary::Image) -> Self {
        self.tag_and_inner_value(tag, InnerValue::Image(image))
    }

    /// Adds encoded images under `"{tag}/{index}"`, in order.
    pub fn encoded_images(mut self, tag: &str, images: Vec<EncodedImage>) -> Self {
        for (i, img) in images.into_iter().enumerate() {
            self = self.image(&format!("{}/{}", tag, i), img.into_proto());
        }
        self
    }

    /// PNG-encodes each image and adds it under `"{tag}/{index}"`.
    ///
    /// Every image is encoded before any is added, so on error nothing from
    /// this call lands in the summary.
    pub fn images<S, D>(self, tag: &str, images: &[ArrayBase<S, D>]) -> Result<Self>
    where
        S: Data,
        S::Elem: Pixel,
        D: Dimension,
    {
        Ok(self.encoded_images(tag, encode_all(images)?))
    }

    /// Adds a pre-bucketed histogram.
    pub fn histogram_proto(self, tag: &str, histo: pb::HistogramProto) -> Self {
        self.tag_and_inner_value(tag, InnerValue::Histo(histo))
    }

    /// Buckets `values` into `bins` equal-width buckets and adds the result.
    pub fn histogram(self, tag: &str, bins: usize, values: &[f64]) -> Result<Self> {
        let histo = histogram(values, bins)?;
        Ok(self.histogram_proto(tag, histo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_values_keep_insertion_order() {
        let summary = SummaryBuilder::new()
            .scalar("loss", 0.25)
            .histogram("weights", 3, &[1.0, 2.0, 3.0])
            .unwrap()
            .build();
        let tags: Vec<&str> = summary.value.iter().map(|v| v.tag.as_str()).collect();
        assert_eq!(tags, vec!["loss", "weights"]);
        assert_eq!(summary.value[0].value, Some(InnerValue::SimpleValue(0.25)));
        match &summary.value[1].value {
            Some(InnerValue::Histo(h)) => assert_eq!(h.bucket, vec![1.0, 1.0, 1.0]),
            other => panic!("expected histogram, got {:?}", other),
        }
    }

    #[test]
    fn test_images_are_indexed_under_tag() {
        let imgs = vec![Array2::<u8>::zeros((4, 5)), Array2::<u8>::ones((4, 5))];
        let summary = SummaryBuilder::new().images("samples", &imgs).unwrap().build();
        let tags: Vec<&str> = summary.value.iter().map(|v| v.tag.as_str()).collect();
        assert_eq!(tags, vec!["samples/0", "samples/1"]);
        for value in &summary.value {
            match &value.value {
                Some(InnerValue::Image(img)) => {
                    assert_eq!((img.height, img.width, img.colorspace), (4, 5, 1));
                }
                other => panic!("expected image, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_bad_image_adds_nothing() {
        let imgs = vec![Array2::<u8>::zeros((2, 2)), Array2::<u8>::zeros((0, 2))];
        assert!(SummaryBuilder::new().images("bad", &imgs).is_err());
    }
}
