/// The letters one decimal digit may be encoded as.
///
/// Buckets follow the QWERTY layout with alternating capitalization.
/// All ten buckets together use each of the 52 ASCII letters exactly once,
/// so any letter maps back to a single digit.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct DigitBucket {
    /// The digit this bucket encodes.
    digit: u8,
    /// Ordered candidate letters.
    letters: &'static [u8],
}

/// Constant of all the buckets, indexed by digit value.
/// This is what `DigitBucket::buckets()` returns.
static BUCKETS: [DigitBucket; 10] = [
    DigitBucket::new(0, b"qWeRtY"),
    DigitBucket::new(1, b"QwErTy"),
    DigitBucket::new(2, b"uIoPa"),
    DigitBucket::new(3, b"UiOpA"),
    DigitBucket::new(4, b"sDfGh"),
    DigitBucket::new(5, b"SdFgH"),
    DigitBucket::new(6, b"jKlZx"),
    DigitBucket::new(7, b"JkLzX"),
    DigitBucket::new(8, b"cVbNm"),
    DigitBucket::new(9, b"CvBnM"),
];

impl DigitBucket {
    const fn new(digit: u8, letters: &'static [u8]) -> Self {
        Self { digit, letters }
    }

    /// Get all ten buckets in digit order.
    pub fn buckets() -> &'static [DigitBucket; 10] {
        &BUCKETS
    }

    /// Get the bucket for a digit value.
    ///
    /// Returns `None` for anything above 9.
    ///
    /// ```
    /// use unique_slug::core::DigitBucket;
    ///
    /// let bucket = DigitBucket::for_digit(1).unwrap();
    /// assert_eq!("QwErTy", bucket.as_str());
    /// assert!(DigitBucket::for_digit(10).is_none());
    /// ```
    pub fn for_digit(digit: u8) -> Option<&'static DigitBucket> {
        BUCKETS.get(digit as usize)
    }

    /// Get the bucket for an ASCII digit character.
    pub fn for_char(c: char) -> Option<&'static DigitBucket> {
        c.to_digit(10).and_then(|d| Self::for_digit(d as u8))
    }

    /// Which digit produced this letter, if any.
    ///
    /// ```
    /// use unique_slug::core::DigitBucket;
    ///
    /// assert_eq!(Some(7), DigitBucket::digit_of('z'));
    /// assert_eq!(Some(0), DigitBucket::digit_of('Y'));
    /// assert_eq!(None, DigitBucket::digit_of('-'));
    /// ```
    pub fn digit_of(c: char) -> Option<u8> {
        BUCKETS.iter().find(|b| b.contains(c)).map(|b| b.digit)
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Number of letters in this bucket. Always 5 or 6.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.letters.contains(&(c as u8))
    }

    pub fn as_str(&self) -> &'static str {
        // Bucket tables are ASCII literals.
        std::str::from_utf8(self.letters).unwrap_or_default()
    }

    /// Pick the letter selected by one random byte.
    ///
    /// This is a plain `byte % len`. Since 256 is not a multiple
    /// of 5 or 6 the lower indices come up slightly more often
    /// (52 vs 51 of 256 for size 5, 43 vs 42 for size 6).
    /// Existing slugs were generated with that distribution so it is kept.
    pub fn pick(&self, byte: u8) -> char {
        self.letters[byte as usize % self.letters.len()] as char
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bucket_table() {
        let expected = [
            "qWeRtY", "QwErTy", "uIoPa", "UiOpA", "sDfGh", "SdFgH", "jKlZx", "JkLzX", "cVbNm",
            "CvBnM",
        ];
        for (d, letters) in expected.iter().enumerate() {
            let bucket = DigitBucket::for_digit(d as u8).unwrap();
            assert_eq!(*letters, bucket.as_str());
            assert_eq!(d as u8, bucket.digit());
        }
    }

    #[test]
    fn test_bucket_sizes() {
        let sizes: Vec<usize> = DigitBucket::buckets().iter().map(|b| b.len()).collect();
        assert_eq!(vec![6, 6, 5, 5, 5, 5, 5, 5, 5, 5], sizes);
    }

    #[test]
    fn test_buckets_are_disjoint_and_cover_alphabet() {
        let mut seen = HashSet::new();
        for bucket in DigitBucket::buckets() {
            for c in bucket.as_str().chars() {
                assert!(seen.insert(c), "letter {c} appears in two buckets");
            }
        }
        assert_eq!(52, seen.len());
        assert!(seen.iter().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_digit_of_round_trips_every_letter() {
        for bucket in DigitBucket::buckets() {
            for c in bucket.as_str().chars() {
                assert_eq!(Some(bucket.digit()), DigitBucket::digit_of(c));
            }
        }
        assert_eq!(None, DigitBucket::digit_of('5'));
        assert_eq!(None, DigitBucket::digit_of('é'));
    }

    #[test]
    fn test_pick_uses_plain_modulo() {
        let zero = DigitBucket::for_digit(0).unwrap();
        assert_eq!('q', zero.pick(0));
        assert_eq!('Y', zero.pick(5));
        assert_eq!('q', zero.pick(6));
        // 255 % 6 == 3
        assert_eq!('R', zero.pick(255));

        let seven = DigitBucket::for_digit(7).unwrap();
        // 255 % 5 == 0
        assert_eq!('J', seven.pick(255));
        assert_eq!('X', seven.pick(4));
    }

    #[test]
    fn test_pick_bias_counts() {
        let two = DigitBucket::for_digit(2).unwrap();
        let mut counts = [0usize; 5];
        for byte in 0..=255u8 {
            let c = two.pick(byte);
            let idx = two.as_str().find(c).unwrap();
            counts[idx] += 1;
        }
        assert_eq!([52, 51, 51, 51, 51], counts);
    }

    #[test]
    fn test_for_char() {
        assert_eq!(Some(9), DigitBucket::for_char('9').map(|b| b.digit()));
        assert!(DigitBucket::for_char('x').is_none());
    }
}
