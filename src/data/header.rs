//! Recording header: metadata slots followed by per-axis extents.

use crate::error::{RdplotError, Result};

/// Header of a recording.
///
/// The serialized form is `[kind, element_type, extent_1, ..., extent_N]`.
/// Extents are kept in declared axis order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Kind of the recorded data (first metadata slot, e.g. `Mat`).
    pub kind: String,
    /// Element type of the recorded data (second metadata slot, e.g. `CV_32F`).
    pub element_type: String,
    /// Extent of each axis, in declared order.
    pub extents: Vec<usize>,
}

impl Header {
    /// Create a new header.
    pub fn new(kind: impl Into<String>, element_type: impl Into<String>, extents: Vec<usize>) -> Self {
        Self {
            kind: kind.into(),
            element_type: element_type.into(),
            extents,
        }
    }

    /// Create a header carrying only extents, with empty metadata slots.
    pub fn with_extents(extents: Vec<usize>) -> Self {
        Self::new("", "", extents)
    }

    /// Parse a header from its serialized fields.
    ///
    /// `line` is used for error reporting only.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>, line: usize) -> Result<Self> {
        let mut fields = fields.into_iter();
        let kind = fields.next().ok_or(RdplotError::MissingHeader)?;
        let element_type = fields.next().unwrap_or_default();

        let extents = fields
            .enumerate()
            .map(|(i, field)| {
                field.parse::<usize>().map_err(|e| {
                    RdplotError::parse(line, i + 3, format!("invalid extent '{}': {}", field, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let header = Self::new(kind, element_type, extents);
        if header.checked_frame_len().is_none() {
            return Err(RdplotError::parse(
                line,
                3,
                format!("extents {:?} overflow the frame length", header.extents),
            ));
        }
        Ok(header)
    }

    /// Number of declared axes.
    pub fn dimension(&self) -> usize {
        self.extents.len()
    }

    /// Extent of the 0-indexed axis `axis`.
    pub fn extent(&self, axis: usize) -> Option<usize> {
        self.extents.get(axis).copied()
    }

    /// Number of values in one frame (1 for scalar data).
    ///
    /// Saturates at `usize::MAX`, which no frame can match.
    pub fn element_count(&self) -> usize {
        self.extents.iter().fold(1, |acc: usize, &e| acc.saturating_mul(e))
    }

    /// Interleaved channels per element, from an element type such as
    /// `CV_8UC3` (1 if the type carries no channel suffix).
    pub fn channels(&self) -> usize {
        self.element_type
            .rsplit_once('C')
            .and_then(|(_, n)| n.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(1)
    }

    /// Number of values in one recorded frame, channels included.
    pub fn frame_len(&self) -> usize {
        self.checked_frame_len().unwrap_or(usize::MAX)
    }

    /// Frame length, or `None` if the extents overflow `usize`.
    pub fn checked_frame_len(&self) -> Option<usize> {
        self.extents
            .iter()
            .try_fold(self.channels(), |acc, &e| acc.checked_mul(e))
    }

    /// Array shape of a frame: declared extents in reverse, so that the last
    /// declared axis varies fastest.
    pub fn reversed_shape(&self) -> Vec<usize> {
        self.extents.iter().rev().copied().collect()
    }

    /// Reject a frame whose length does not match the declared extents.
    pub fn check_frame_len(&self, len: usize) -> Result<()> {
        let expected = self.element_count();
        if expected != len {
            return Err(RdplotError::ShapeMismatch {
                extents: self.extents.clone(),
                expected,
                actual: len,
                line: None,
            });
        }
        Ok(())
    }
}

/// Dimensionality of the data described by `header`.
pub fn get_dimension(header: &Header) -> usize {
    header.dimension()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_metadata_and_extents() {
        let header = Header::from_fields(["Mat", "CV_32F", "2", "3"], 1).unwrap();
        assert_eq!(header.kind, "Mat");
        assert_eq!(header.element_type, "CV_32F");
        assert_eq!(header.extents, vec![2, 3]);
        assert_eq!(get_dimension(&header), 2);
        assert_eq!(header.element_count(), 6);
        assert_eq!(header.reversed_shape(), vec![3, 2]);
    }

    #[test]
    fn channels_from_element_type() {
        assert_eq!(Header::new("Mat", "CV_8UC3", vec![4, 2]).channels(), 3);
        assert_eq!(Header::new("Mat", "CV_8UC3", vec![4, 2]).frame_len(), 24);
        assert_eq!(Header::new("Mat", "CV_32F", vec![4, 2]).channels(), 1);
        assert_eq!(Header::with_extents(vec![4]).channels(), 1);
    }

    #[test]
    fn scalar_header_has_no_axes() {
        let header = Header::from_fields(["Mat", "CV_64F"], 1).unwrap();
        assert_eq!(header.dimension(), 0);
        assert_eq!(header.element_count(), 1);
    }

    #[test]
    fn bad_extent_reports_column() {
        let err = Header::from_fields(["Mat", "CV_32F", "2", "three"], 1).unwrap_err();
        assert!(matches!(err, RdplotError::Parse { line: 1, column: 4, .. }));
    }

    #[test]
    fn overflowing_extents_are_rejected() {
        let huge = (usize::MAX / 2).to_string();
        let err = Header::from_fields(["Mat", "CV_32F", huge.as_str(), "3"], 1).unwrap_err();
        assert!(matches!(err, RdplotError::Parse { line: 1, column: 3, .. }));

        let err = Header::from_fields(["Mat", "CV_8UC3", huge.as_str()], 1).unwrap_err();
        assert!(matches!(err, RdplotError::Parse { line: 1, .. }));

        let header = Header::with_extents(vec![usize::MAX, 2]);
        assert_eq!(header.element_count(), usize::MAX);
        assert_eq!(header.checked_frame_len(), None);
        assert!(header.check_frame_len(0).is_err());
    }

    #[test]
    fn frame_length_must_match_extents() {
        let header = Header::with_extents(vec![2, 3]);
        assert!(header.check_frame_len(6).is_ok());
        assert!(matches!(
            header.check_frame_len(5),
            Err(RdplotError::ShapeMismatch { expected: 6, actual: 5, .. })
        ));
    }
}
