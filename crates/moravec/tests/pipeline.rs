use moravec::detect::{detect_points, gray_image_from_slice, gray_view, DetectError};
use moravec::io::{read_points, write_points, DetectConfig, DetectReport, MoravecIoError};
use moravec::overlay::render_overlay;
use moravec::{CornerPoint, MoravecParams, WindowError};

fn spike_image() -> image::GrayImage {
    image::GrayImage::from_fn(11, 11, |x, y| {
        if (x, y) == (5, 5) {
            image::Luma([200u8])
        } else {
            image::Luma([0u8])
        }
    })
}

#[test]
fn helper_matches_core_engine() {
    let img = spike_image();
    let params = MoravecParams::default();

    let helper = detect_points(&img, &params).expect("valid params");
    let core = moravec::core::find_points(&gray_view(&img), &params).expect("valid params");

    assert_eq!(helper, core);
    assert_eq!(helper, vec![CornerPoint { col: 5, row: 5 }]);
}

#[test]
fn even_window_size_is_rejected_before_scanning() {
    let img = spike_image();
    let params = MoravecParams {
        window_size: 4,
        ..MoravecParams::default()
    };

    let err = detect_points(&img, &params).unwrap_err();
    assert!(matches!(
        err,
        DetectError::Window(WindowError::EvenSize(4))
    ));
}

#[test]
fn raw_buffer_length_is_validated() {
    let err = gray_image_from_slice(4, 4, &[0u8; 15]).unwrap_err();
    assert!(matches!(
        err,
        DetectError::InvalidGrayBuffer {
            expected: 16,
            got: 15
        }
    ));
}

#[test]
fn points_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("points.txt");
    let points = vec![
        CornerPoint { col: 5, row: 5 },
        CornerPoint { col: 5, row: 9 },
        CornerPoint { col: 7, row: 2 },
    ];

    write_points(&path, &points).expect("write points");

    let raw = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(raw, "5, 5\n5, 9\n7, 2\n");
    assert_eq!(read_points(&path).expect("parse points"), points);
}

#[test]
fn malformed_point_lines_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("points.txt");
    std::fs::write(&path, "5, 5\nnot a point\n").expect("write file");

    let err = read_points(&path).unwrap_err();
    assert!(matches!(err, MoravecIoError::MalformedLine(line) if line == "not a point"));
}

#[test]
fn config_json_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let mut cfg = DetectConfig::new("lena.tif");
    cfg.params.window_size = 5;
    cfg.params.threshold = 1200.0;
    cfg.output_path = Some("points.txt".into());
    cfg.write_json(&path).expect("write config");

    let loaded = DetectConfig::load_json(&path).expect("load config");
    assert_eq!(loaded.image_path, "lena.tif");
    assert_eq!(loaded.params, cfg.params);
    assert_eq!(loaded.output_path(), std::path::PathBuf::from("points.txt"));
}

#[test]
fn config_defaults_apply_to_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"image_path": "lena.tif"}"#).expect("write file");

    let cfg = DetectConfig::load_json(&path).expect("load config");
    assert_eq!(cfg.params, MoravecParams::default());
    assert_eq!(cfg.output_path(), std::path::PathBuf::from("output.txt"));
}

#[test]
fn report_round_trip_records_points_and_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");

    let cfg = DetectConfig::new("lena.tif");
    let mut report = DetectReport::new(&cfg, 11, 11);
    report.set_points(vec![CornerPoint { col: 5, row: 5 }]);
    report.write_json(&path).expect("write report");

    let loaded = DetectReport::load_json(&path).expect("load report");
    assert_eq!(loaded.num_points, 1);
    assert_eq!(loaded.points, vec![CornerPoint { col: 5, row: 5 }]);
    assert!(loaded.error.is_none());

    report.set_error(WindowError::EvenSize(4));
    assert_eq!(report.error.as_deref(), Some("window size must be odd (got 4)"));
}

#[test]
fn overlay_keeps_dimensions_and_marks_detections() {
    let img = spike_image();
    let points = detect_points(&img, &MoravecParams::default()).expect("valid params");
    let overlay = render_overlay(&img, &points);

    assert_eq!(overlay.dimensions(), img.dimensions());
    assert_eq!(overlay.get_pixel(5, 5), &image::Rgb([255, 0, 0]));
    assert_eq!(overlay.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
}
