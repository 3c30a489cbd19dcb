//! Property-based tests for windows-style parsing and the long-path marker.
//!
//! The inline tests in `value.rs` cover posix round trips and joining; this
//! module runs the heavier windows cases behind the `property-tests` feature.

use super::{FsPath, PathStyle, LONG_PATH_PREFIX, MAX_PATH_LEGACY};
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,40}"
}

fn drive_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]".prop_map(|letter| format!("{letter}:"))
}

fn windows_absolute_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (drive_strategy(), prop::collection::vec(segment_strategy(), 0..=20))
}

fn legacy_length(segments: &[String]) -> usize {
    segments
        .iter()
        .map(|s| s.len() + 1)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The marker is emitted exactly when the legacy length is exceeded
    #[test]
    fn long_path_prefix_threshold((drive, parts) in windows_absolute_strategy()) {
        let raw = format!("{drive}\\{}", parts.join("\\"));
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        let out = path.to_style_string(PathStyle::Windows);

        let exceeds = legacy_length(path.segments()) > MAX_PATH_LEGACY;
        prop_assert_eq!(out.starts_with(LONG_PATH_PREFIX), exceeds);
    }

    // Stripping the marker and re-parsing gives the same segments
    #[test]
    fn long_path_prefix_round_trip((drive, parts) in windows_absolute_strategy()) {
        let raw = format!("{drive}\\{}", parts.join("\\"));
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        let out = path.to_style_string(PathStyle::Windows);

        let stripped = out.strip_prefix(LONG_PATH_PREFIX).unwrap_or(&out);
        let reparsed = FsPath::with_style(stripped, PathStyle::Windows);
        prop_assert_eq!(reparsed.segments(), path.segments());
        prop_assert!(reparsed.is_absolute());

        let with_marker = FsPath::with_style(&out, PathStyle::Windows);
        prop_assert_eq!(with_marker.segments(), path.segments());
    }

    // The marker never leaks into segments
    #[test]
    fn prefix_never_in_segments((drive, parts) in windows_absolute_strategy()) {
        let raw = format!("{LONG_PATH_PREFIX}{drive}\\{}", parts.join("\\"));
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        for segment in path.segments() {
            prop_assert!(!segment.contains('?'));
            prop_assert!(!segment.contains('\\'));
        }
    }

    // Either separator tokenizes identically under windows style
    #[test]
    fn windows_separators_equivalent(parts in prop::collection::vec(segment_strategy(), 0..=8)) {
        let forward = FsPath::with_style(&parts.join("/"), PathStyle::Windows);
        let backward = FsPath::with_style(&parts.join("\\"), PathStyle::Windows);
        prop_assert_eq!(forward.segments(), backward.segments());
        prop_assert_eq!(
            forward.to_style_string(PathStyle::Windows),
            backward.to_style_string(PathStyle::Windows)
        );
    }

    // Absolute iff the first segment is a drive
    #[test]
    fn windows_absolute_needs_drive(parts in prop::collection::vec(segment_strategy(), 1..=8), rooted in any::<bool>()) {
        let body = parts.join("\\");
        let raw = if rooted { format!("\\{body}") } else { body };
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        let expected = parts[0].len() >= 2
            && parts[0].as_bytes()[0].is_ascii_alphabetic()
            && parts[0].as_bytes()[1] == b':'
            && !rooted;
        prop_assert_eq!(path.is_absolute(), expected);
    }

    // Parent drops exactly one segment and keeps the flags
    #[test]
    fn parent_drops_last((drive, parts) in windows_absolute_strategy()) {
        let raw = format!("{drive}\\{}", parts.join("\\"));
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        let parent = path.parent_path();
        prop_assert_eq!(parent.len() + 1, path.len());
        prop_assert_eq!(parent.is_absolute(), path.is_absolute());
        prop_assert_eq!(parent.style(), path.style());
    }

    // Wide round trip preserves segments
    #[test]
    fn wide_round_trip((drive, parts) in windows_absolute_strategy()) {
        let raw = format!("{drive}\\{}", parts.join("\\"));
        let path = FsPath::with_style(&raw, PathStyle::Windows);
        let wide = path.to_wide(PathStyle::Windows);
        let back = FsPath::from_wide(&wide, PathStyle::Windows).unwrap();
        prop_assert_eq!(back.segments(), path.segments());
    }
}
