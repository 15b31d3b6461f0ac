use rand::TryCryptoRng;
use tracing::event;

use super::{DigitBucket, SlugError};

/// Swaps digits for random letters from their bucket.
///
/// The rng must be a cryptographically secure generator. One byte is
/// drawn per digit and the letter is picked with `DigitBucket::pick`.
#[derive(Debug)]
pub struct BucketEncoder<'a, R: TryCryptoRng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: TryCryptoRng + ?Sized> BucketEncoder<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Pick a letter from `bucket` for the digit at `position`.
    ///
    /// `position` is only used to report which digit failed.
    pub fn encode(&mut self, position: usize, bucket: &DigitBucket) -> Result<char, SlugError> {
        let mut byte = [0u8; 1];
        if let Err(e) = self.rng.try_fill_bytes(&mut byte) {
            event!(
                tracing::Level::WARN,
                position,
                error = %e,
                "secure random source failed"
            );
            return Err(SlugError::RandomSourceUnavailable {
                position,
                reason: e.to_string(),
            });
        }

        Ok(bucket.pick(byte[0]))
    }
}

#[cfg(test)]
pub(crate) mod test_rng {
    use std::fmt;

    use rand::{CryptoRng, RngCore, TryCryptoRng, TryRngCore};

    /// Replays a fixed list of bytes, cycling when it runs out.
    #[derive(Debug, Clone)]
    pub struct ByteSequenceRng {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl ByteSequenceRng {
        pub fn new(bytes: Vec<u8>) -> Self {
            Self { bytes, pos: 0 }
        }
    }

    impl RngCore for ByteSequenceRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for b in dst.iter_mut() {
                *b = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
        }
    }

    impl CryptoRng for ByteSequenceRng {}

    #[derive(Debug)]
    pub struct SourceClosed;

    impl fmt::Display for SourceClosed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("entropy source closed")
        }
    }

    impl std::error::Error for SourceClosed {}

    /// Hands out `good_bytes` bytes then fails every draw after that.
    #[derive(Debug)]
    pub struct FailingRng {
        pub good_bytes: usize,
    }

    impl TryRngCore for FailingRng {
        type Error = SourceClosed;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Err(SourceClosed)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Err(SourceClosed)
        }

        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
            if self.good_bytes < dst.len() {
                return Err(SourceClosed);
            }
            self.good_bytes -= dst.len();
            dst.fill(0);
            Ok(())
        }
    }

    impl TryCryptoRng for FailingRng {}
}
