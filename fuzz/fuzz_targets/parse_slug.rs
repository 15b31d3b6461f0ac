#![no_main]

extern crate libfuzzer_sys;
extern crate unique_slug;

use libfuzzer_sys::fuzz_target;
use unique_slug::Slug;

fuzz_target!(|data: &str| {
    if let Ok(slug) = Slug::parse(data) {
        let precision = slug.precision();
        assert_eq!(precision.slug_length(), slug.len());
        assert_eq!(precision.length(), slug.digits().len());

        let (left, right) = slug.halves();
        assert_eq!(precision.separator_index(), left.len());
        assert!(!right.contains('-'));
    }
});
