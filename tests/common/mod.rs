#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the choropleth binary.
#[macro_export]
macro_rules! choropleth {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("choropleth"))
    };
}

/// Values for two origin countries across four destination countries.
///
/// Germany has no Ukraine value and Czechia a non-numeric one, so both fall
/// back to the no-data color for that attribute.
pub const MIGRATION_CSV: &str = "\
CountryCode,country,Ukraine,Poland
PL,Poland,12000,
DE,Germany,,45000
CZ,Czechia,n/a,800
FR,France,3000,100
";

/// Four square countries plus one (Spain) with no matching row.
pub const COUNTRIES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"CC": "PL", "sovereignt": "Poland"},
     "geometry": {"type": "Polygon", "coordinates": [[[19,51],[21,51],[21,53],[19,53],[19,51]]]}},
    {"type": "Feature", "properties": {"CC": "DE", "sovereignt": "Germany"},
     "geometry": {"type": "Polygon", "coordinates": [[[9,50],[12,50],[12,53],[9,53],[9,50]]]}},
    {"type": "Feature", "properties": {"CC": "CZ", "sovereignt": "Czechia"},
     "geometry": {"type": "Polygon", "coordinates": [[[13,49],[16,49],[16,50],[13,50],[13,49]]]}},
    {"type": "Feature", "properties": {"CC": "FR", "sovereignt": "France"},
     "geometry": {"type": "Polygon", "coordinates": [[[0,45],[5,45],[5,48],[0,48],[0,45]]]}},
    {"type": "Feature", "properties": {"CC": "ES", "sovereignt": "Spain"},
     "geometry": {"type": "Polygon", "coordinates": [[[-5,38],[0,38],[0,42],[-5,42],[-5,38]]]}}
  ]
}"#;

/// Poland and Germany as a quantized TopoJSON topology.
pub const COUNTRIES_TOPOJSON: &str = r#"{
  "type": "Topology",
  "transform": {"scale": [1, 1], "translate": [0, 0]},
  "arcs": [
    [[19,51],[2,0],[0,2],[-2,0],[0,-2]],
    [[9,50],[3,0],[0,3],[-3,0],[0,-3]]
  ],
  "objects": {
    "EuropeCountries": {
      "type": "GeometryCollection",
      "geometries": [
        {"type": "Polygon", "arcs": [[0]], "properties": {"CC": "PL", "sovereignt": "Poland"}},
        {"type": "Polygon", "arcs": [[1]], "properties": {"CC": "DE", "sovereignt": "Germany"}}
      ]
    }
  }
}"#;

/// Context layer with a single unkeyed land mass.
pub const LAND_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"admin": "Land"},
     "geometry": {"type": "Polygon", "coordinates": [[[-10,35],[30,35],[30,60],[-10,60],[-10,35]]]}}
  ]
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding `data.csv` and `countries.geojson`.
    pub fn with_inputs() -> Self {
        let fixture = Self::new();
        fixture.create_file("data.csv", MIGRATION_CSV);
        fixture.create_file("countries.geojson", COUNTRIES_GEOJSON);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a local choropleth config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".choropleth.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the absolute path of a file in the temp directory.
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
