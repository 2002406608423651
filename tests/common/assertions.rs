//! Assertion helpers for tests.

use led_resample::{Rgb, SampleList};
use pretty_assertions::assert_eq;

/// Assert every sample equals `expected`
pub fn assert_uniform(samples: &SampleList, expected: Rgb) {
    let expected_list = vec![expected; samples.len()];
    assert_eq!(samples.as_slice(), expected_list.as_slice());
}

/// Assert bytes carry the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every sample is a grey (r == g == b)
pub fn assert_grey(samples: &SampleList) {
    for (i, c) in samples.iter().enumerate() {
        assert!(c.r == c.g && c.g == c.b, "sample {i} is not grey: {c}");
    }
}
