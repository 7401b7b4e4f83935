//! Tests for pointer event script parsing

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tilefield::io::error::SceneError;
    use tilefield::io::events::{PointerEvent, load_events, parse_events};

    // Tests every event kind parses from its tag
    // Verified by renaming a variant tag
    #[test]
    fn test_parse_all_kinds() {
        let json = r#"[
            {"type": "pointer_down", "x": 1.0, "y": 2.0},
            {"type": "pointer_move", "x": 3.5, "y": -4.0},
            {"type": "pointer_up"},
            {"type": "pointer_leave"},
            {"type": "tile_click", "x": 75.0, "z": -75.0}
        ]"#;
        let events = parse_events(json).unwrap_or_default();
        assert_eq!(
            events,
            vec![
                PointerEvent::PointerDown { x: 1.0, y: 2.0 },
                PointerEvent::PointerMove { x: 3.5, y: -4.0 },
                PointerEvent::PointerUp,
                PointerEvent::PointerLeave,
                PointerEvent::TileClick { x: 75.0, z: -75.0 },
            ]
        );
    }

    // Tests unknown tags are rejected
    // Verified by adding an untagged fallback
    #[test]
    fn test_parse_unknown_tag() {
        assert!(parse_events(r#"[{"type": "wheel"}]"#).is_err());
        assert!(parse_events(r#"[{"type": "pointer_down", "x": 1.0}]"#).is_err());
    }

    // Tests loading from disk and error mapping
    // Verified by mapping parse failures to file system errors
    #[test]
    fn test_load_events() {
        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            return;
        };
        assert!(writeln!(file, r#"[{{"type": "pointer_up"}}]"#).is_ok());
        let loaded = load_events(file.path());
        assert!(matches!(loaded.as_deref(), Ok([PointerEvent::PointerUp])));

        let Ok(mut bad) = tempfile::NamedTempFile::new() else {
            return;
        };
        assert!(writeln!(bad, "not json").is_ok());
        assert!(matches!(
            load_events(bad.path()),
            Err(SceneError::EventScript { .. })
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            load_events(&missing),
            Err(SceneError::FileSystem { .. })
        ));
    }
}
