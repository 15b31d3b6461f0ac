#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate unique_slug;

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use rand::{SeedableRng, rngs::StdRng};
use unique_slug::core::{Digits, FixedClock};
use unique_slug::{Precision, Slug, SlugGenerator};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub precision: Precision,
    pub secs: u64,
    pub nanos: u32,
    pub seed: u64,
}

fuzz_target!(|input: Input| {
    let since_epoch = Duration::new(input.secs, input.nanos % 1_000_000_000);
    let mut generator = SlugGenerator::builder()
        .precision(input.precision)
        .clock(FixedClock(since_epoch))
        .rng(StdRng::seed_from_u64(input.seed))
        .build()
        .unwrap();

    let slug = generator.generate().unwrap();
    let expected = Digits::render(
        input.precision.timestamp_value(since_epoch),
        input.precision,
    );

    assert_eq!(input.precision.slug_length(), slug.len());
    assert_eq!(expected, slug.digits());
    assert_eq!(slug, slug.as_str().parse::<Slug>().unwrap());
});
