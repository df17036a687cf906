use super::RawSegment;
use crate::image::ImageF32;

/// Anything that turns a luminance plane (0–255 scale) into raw line segments.
///
/// Implementations must not keep references to the plane after returning.
pub trait SegmentSource {
    fn segments(&self, image: &ImageF32) -> Vec<RawSegment>;
}

impl<F> SegmentSource for F
where
    F: Fn(&ImageF32) -> Vec<RawSegment>,
{
    fn segments(&self, image: &ImageF32) -> Vec<RawSegment> {
        self(image)
    }
}
