//! Checksum calculation for stored dataset integrity.

use sha2::{Digest, Sha256};

use crate::models::frame::Frame;

/// SHA-256 over a canonical serialization of a frame.
///
/// Column order and row order both contribute; two frames with the same
/// content in the same order always hash identically.
pub fn frame_checksum(frame: &Frame) -> String {
    let mut hasher = Sha256::new();
    for column in frame.columns() {
        hasher.update(column.as_bytes());
        hasher.update([0u8]);
    }
    for row in frame.rows() {
        for value in row {
            hasher.update(value.to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(values: &[f64]) -> Frame {
        let mut frame = Frame::new(vec!["v".to_string()]);
        for &v in values {
            frame.push_row(vec![v]).unwrap();
        }
        frame
    }

    #[test]
    fn test_checksum_consistency() {
        assert_eq!(
            frame_checksum(&frame(&[1.0, 2.0])),
            frame_checksum(&frame(&[1.0, 2.0]))
        );
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(
            frame_checksum(&frame(&[1.0, 2.0])),
            frame_checksum(&frame(&[2.0, 1.0]))
        );
    }
}
