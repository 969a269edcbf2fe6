use super::*;

#[test]
fn minimal_scene_uses_defaults() {
    let scene = Scene::from_json_str(r#"{"width": 8, "height": 4}"#).unwrap();
    assert_eq!(scene, Scene::new(8, 4, FormatPreset::Rgba8888));
    assert!(scene.policy.antialiasing);
    assert!(scene.ops.is_empty());
}

#[test]
fn ops_are_tagged_and_fill_defaults() {
    let scene = Scene::from_json_str(
        r##"{
            "width": 16,
            "height": 16,
            "format": "rgb565",
            "clear": "#102030",
            "ops": [
                {"op": "pixel", "x": 1, "y": 2, "color": "red"},
                {"op": "circle", "x": 8, "y": 8, "radius": 3, "color": [0, 0, 255, 128], "filled": true},
                {"op": "disc_with_edge", "x": 8, "y": 8, "outer": 5, "inner": 2,
                 "ring": {"r": 1, "g": 2, "b": 3}, "disc": "white", "blended": false}
            ]
        }"##,
    )
    .unwrap();

    assert_eq!(scene.format, FormatPreset::Rgb565);
    assert_eq!(scene.clear, Some(ColorRecord::rgb(0x10, 0x20, 0x30)));
    assert_eq!(
        scene.ops[0],
        DrawOp::Pixel {
            x: 1,
            y: 2,
            color: ColorRecord::rgb(255, 0, 0),
            blend: true,
            clip: true,
        }
    );
    assert_eq!(
        scene.ops[1],
        DrawOp::Circle {
            x: 8,
            y: 8,
            radius: 3,
            color: ColorRecord::rgba(0, 0, 255, 128),
            filled: true,
            blended: true,
        }
    );
    assert_eq!(scene.ops[2].kind(), "disc_with_edge");
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = Scene::from_json_str(r#"{"width": 8, "height": 4, "depth": 3}"#).unwrap_err();
    assert!(matches!(err, SoftpixError::Serde(_)));
}

#[test]
fn unknown_op_is_rejected() {
    let err = Scene::from_json_str(r#"{"width": 8, "height": 4, "ops": [{"op": "spline"}]}"#)
        .unwrap_err();
    assert!(matches!(err, SoftpixError::Serde(_)));
}

#[test]
fn validate_rejects_empty_and_oversized_canvases() {
    for (w, h) in [(0, 4), (4, 0), (MAX_SCENE_DIMENSION + 1, 1)] {
        let err = Scene::new(w, h, FormatPreset::Rgb888).validate().unwrap_err();
        assert!(matches!(err, SoftpixError::Validation(_)), "{w}x{h}");
    }
    Scene::new(MAX_SCENE_DIMENSION, 1, FormatPreset::Rgb888)
        .validate()
        .unwrap();
}

#[test]
fn validate_rejects_short_pitch() {
    let mut scene = Scene::new(10, 2, FormatPreset::Rgb888);
    scene.pitch = Some(29);
    assert!(matches!(
        scene.validate().unwrap_err(),
        SoftpixError::Validation(_)
    ));
    scene.pitch = Some(30);
    scene.validate().unwrap();
}

#[test]
fn validate_names_the_bad_op() {
    let mut scene = Scene::new(10, 10, FormatPreset::Rgba8888);
    scene.ops.push(DrawOp::Cross {
        x: 1,
        y: 1,
        edge: 2,
        color: ColorRecord::rgb(0, 0, 0),
    });
    scene.ops.push(DrawOp::DiscWithEdge {
        x: 5,
        y: 5,
        outer: 3,
        inner: 3,
        ring: ColorRecord::rgb(0, 0, 0),
        disc: ColorRecord::rgb(0, 0, 0),
        blended: true,
    });
    let msg = scene.validate().unwrap_err().to_string();
    assert!(msg.contains("op #1 (disc_with_edge)"), "{msg}");
}

#[test]
fn presets_parse_by_name() {
    for preset in FormatPreset::ALL {
        assert_eq!(preset.name().parse::<FormatPreset>().unwrap(), preset);
        preset.pixel_format().unwrap();
    }
    assert_eq!("RGB565".parse::<FormatPreset>().unwrap(), FormatPreset::Rgb565);
    assert!("yuv420".parse::<FormatPreset>().is_err());
}

#[test]
fn preset_names_match_serde_names() {
    for preset in FormatPreset::ALL {
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(json, format!("\"{}\"", preset.name()));
    }
}

#[test]
fn scene_survives_serialization() {
    let mut scene = Scene::new(12, 6, FormatPreset::Indexed8Grey);
    scene.clip = Some(ClipRect::new(1, 1, 10, 4));
    scene.ops.push(DrawOp::Line {
        x1: 0,
        y1: 0,
        x2: 11,
        y2: 5,
        color: ColorRecord::rgba(9, 8, 7, 6),
    });
    let json = serde_json::to_string(&scene).unwrap();
    assert_eq!(Scene::from_json_str(&json).unwrap(), scene);
}

#[test]
fn ellipse_op_parses_and_rejects_negative_half_axes() {
    let mut scene = Scene::from_json_str(
        r#"{"width": 20, "height": 10, "ops": [
            {"op": "ellipse", "x": 10, "y": 5, "rx": 8, "ry": 3, "color": "navy_blue"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(scene.ops[0].kind(), "ellipse");
    assert!(matches!(
        scene.ops[0],
        DrawOp::Ellipse {
            rx: 8,
            ry: 3,
            filled: false,
            blended: true,
            ..
        }
    ));
    scene.validate().unwrap();

    if let DrawOp::Ellipse { ry, .. } = &mut scene.ops[0] {
        *ry = -1;
    }
    let msg = scene.validate().unwrap_err().to_string();
    assert!(msg.contains("op #0 (ellipse)"), "{msg}");
}
