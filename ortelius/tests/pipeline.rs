//! End-to-end pipeline: interchange file → local plane → clip → restore.

use approx::assert_abs_diff_eq;
use ortelius::formats::reader_for_path;
use ortelius::{FeatureReader, TransformingReader};
use ortelius_types::{CoordinateConverter, GeocentricConverter, Rect};

const MIF: &str = r#"Version 300
Charset "WindowsLatin1"
Delimiter ","
Columns 2
  Name Char(32)
  Kind Char(16)
Data

Region 1
  5
27.00 51.00
27.02 51.00
27.02 51.02
27.00 51.02
27.00 51.00
    Pen (1,2,0)
Point 27.01 51.01
"#;

const MID: &str = "\"Polesia\",marsh\n\"Hamlet\",place\n";

fn write_fixture() -> String {
    let dir = std::env::temp_dir().join(format!("ortelius-pipeline-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let mif_path = dir.join("towns.mif");
    std::fs::write(&mif_path, MIF).unwrap();
    std::fs::write(dir.join("towns.mid"), MID).unwrap();
    mif_path.to_string_lossy().into_owned()
}

#[test]
fn interchange_file_reaches_the_display_plane() {
    let path = write_fixture();

    let mut map = TransformingReader::new();
    map.set_reader(reader_for_path(&path).unwrap());
    let converter = GeocentricConverter::new(27.0, 51.0);
    map.set_converter(Box::new(converter));
    map.set_path(&path);
    map.read().unwrap();

    assert_eq!(map.features().len(), 2);
    assert_eq!(map.features()[0].fields_to_string(), "Name:Polesia,Kind:marsh");
    assert_eq!(map.features()[1].fields_to_string(), "Name:Hamlet,Kind:place");

    // The region's south-west corner is the map center.
    let bbox = map.bounding_box().expect("non-empty collection");
    assert_abs_diff_eq!(bbox.x_min, 0.0, epsilon = 1.0);
    assert_abs_diff_eq!(bbox.y_min, 0.0, epsilon = 1.0);
    assert!(bbox.x_max > 1300.0 && bbox.x_max < 1500.0, "x_max {}", bbox.x_max);
    assert!(bbox.y_max > 2100.0 && bbox.y_max < 2300.0, "y_max {}", bbox.y_max);

    // Converted points project back to their source coordinates.
    let back = converter
        .transform_back(&map.features()[1].points()[0])
        .unwrap();
    assert_abs_diff_eq!(back.x(), 27.01, epsilon = 1e-3);
    assert_abs_diff_eq!(back.y(), 51.01, epsilon = 1e-3);

    // Clip to the south-west quarter: the region ring shrinks, the lone
    // point is not a polygon and drops out.
    let original_count = map.point_count();
    map.clip(Rect::new(0.0, 0.0, 700.0, 1100.0));
    assert_eq!(map.features().len(), 1);
    for point in map.features()[0].points() {
        assert!(point.x() >= -0.01 && point.x() <= 700.01);
        assert!(point.y() >= -0.01 && point.y() <= 1100.01);
    }

    map.restore();
    assert_eq!(map.features().len(), 2);
    assert_eq!(map.point_count(), original_count);

    map.restore();
    assert_eq!(map.features().len(), 2);
}
