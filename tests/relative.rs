//! Tests for internalization and relativization.

use iri_resolve::relative::{internalize, relativize};
use iri_resolve::resolve::resolve;
use iri_resolve::types::IriIdentifier;
use iri_resolve::validate::Variant;

/// Creates an absolute identifier.
fn abs(s: &str) -> IriIdentifier {
    IriIdentifier::new(s, Variant::Absolute).expect("test case should be valid")
}

/// Creates a reference.
fn reference(s: &str) -> IriIdentifier {
    IriIdentifier::new(s, Variant::Relative).expect("test case should be valid")
}

/// Relativization cases for same-origin hierarchical identifiers.
// [(base, target, relative)]
const RELATIVIZE_CASES: &[(&str, &str, &str)] = &[
    ("http://x/a/b/c", "http://x/a/d", "../d"),
    ("http://x/a/b/c", "http://x/a/b/d", "d"),
    ("http://x/a/b/c", "http://x/a/b/c", "c"),
    ("http://x/a/b/c", "http://x/a/b/c/d", "c/d"),
    ("http://x/a/b/c/d", "http://x/a/b", "../../b"),
    ("http://x/a/b/c", "http://x/d/e/f", "../../d/e/f"),
    ("http://x/a/b/c", "http://x/", "../../"),
    ("http://x/a/b/", "http://x/a/b/", "."),
    ("http://x/a/b/c", "http://x/a/b/", "."),
    ("http://x/a/b/", "http://x/a/", "../"),
    ("http://x/a/b/c", "http://x/a/d?q", "../d?q"),
    ("http://x/a/b/c", "http://x/a/b/c?q#f", "c?q#f"),
    ("http://x/a/b/", "http://x/a/b/?q", ".?q"),
    ("http://x", "http://x/y/z", "/y/z"),
];

#[test]
fn shortest_relative_paths() {
    for (base, target, expected) in RELATIVIZE_CASES {
        let got = relativize(&abs(base), &reference(target)).expect("same origin");
        assert_eq!(got, *expected, "base={:?}, target={:?}", base, target);
    }
}

/// Resolving the relativized form against the base must yield the
/// normalized target again.
#[test]
fn relativize_round_trips_through_resolve() {
    for (base, target, _) in RELATIVIZE_CASES {
        let base = abs(base);
        let target = abs(target);
        let rel = relativize(&base, &target).expect("same origin");
        let back = resolve(&base, &rel).expect("relative form must resolve");
        assert_eq!(back, target, "base={:?}, rel={:?}", base, rel);
    }
}

/// Scheme comparison is case-insensitive for origin purposes. The textual
/// round trip keeps the base's scheme spelling, so only origin-level
/// equality can be asserted here.
#[test]
fn origin_comparison_ignores_scheme_case() {
    let base = abs("HTTP://x/a/b");
    let target = reference("http://x/c");
    let rel = relativize(&base, &target).expect("same origin");
    assert_eq!(rel, "../c");

    let back = resolve(&base, &rel).expect("resolvable");
    assert_eq!(back, "HTTP://x/c");
    assert!(back.scheme().expect("absolute").eq_ignore_ascii_case("http"));
}

/// Opaque identifiers compare by scheme alone. This is deliberate: an
/// opaque scheme has no authority to compare, and "fixing" this into a
/// full-origin comparison would silently change the results below.
#[test]
fn opaque_origin_is_scheme_only() {
    let base = abs("urn:example:root");

    let same_scheme = reference("urn:example:other");
    assert_eq!(
        relativize(&base, &same_scheme).expect("resolvable"),
        "example:other",
        "scheme-specific part of the target"
    );
    assert_eq!(
        internalize(&base, &same_scheme).expect("resolvable"),
        "example:other"
    );

    // Even an unrelated name part shares the `urn` origin.
    let same_scheme_other_namespace = reference("urn:isbn:0451450523");
    assert_eq!(
        relativize(&base, &same_scheme_other_namespace).expect("resolvable"),
        "isbn:0451450523"
    );

    // A different scheme does not.
    let other_scheme = reference("mailto:a@b.example");
    assert_eq!(
        relativize(&base, &other_scheme).expect("resolvable"),
        "mailto:a@b.example"
    );
}

#[test]
fn internalize_same_origin() {
    let base = abs("http://x/a/b/c");

    assert_eq!(
        internalize(&base, &reference("../d?q")).expect("resolvable"),
        "/a/d?q"
    );
    assert_eq!(
        internalize(&base, &reference("g#s")).expect("resolvable"),
        "/a/b/g#s"
    );
    assert_eq!(
        internalize(&base, &reference("http://x/a/./x/../d")).expect("resolvable"),
        "/a/d"
    );
    // The root-relative form of an empty-path target is empty.
    assert_eq!(internalize(&base, &reference("http://x")).expect("resolvable"), "");
}

#[test]
fn different_origin_stays_absolute() {
    let base = abs("http://x/a/b/c");

    for target in ["https://x/a/d", "http://y/a/d", "urn:example:1"] {
        let target_id = reference(target);
        assert_eq!(
            internalize(&base, &target_id).expect("resolvable"),
            target,
            "internalize, target={:?}",
            target
        );
        assert_eq!(
            relativize(&base, &target_id).expect("resolvable"),
            target,
            "relativize, target={:?}",
            target
        );
    }

    // Authority comparison is exact; a different port is a different origin.
    let other_port = reference("http://x:80/a/d");
    assert_eq!(
        relativize(&base, &other_port).expect("resolvable"),
        "http://x:80/a/d"
    );
}

#[test]
fn relativize_failures_mirror_resolve() {
    let base = abs("urn:example:root");
    assert!(relativize(&base, &reference("not/absolute")).is_err());
    assert!(internalize(&base, &reference("not/absolute")).is_err());
}
