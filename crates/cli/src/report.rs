//! Packing reports.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sphere_pack_core::{Error, Result, SolveResult, SolveSummary};
use sphere_pack_d3::{Sphere, Volume};

/// Output format for packing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON report with volume, spheres and summary
    #[default]
    Json,
    /// CSV with one `x,y,z,radius` row per sphere
    Csv,
}

/// A sphere as a flat `(x, y, z, radius)` record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
}

impl From<&Sphere> for SphereRecord {
    fn from(sphere: &Sphere) -> Self {
        let (x, y, z, radius) = sphere.to_tuple();
        Self { x, y, z, radius }
    }
}

impl From<SphereRecord> for Sphere {
    fn from(record: SphereRecord) -> Self {
        Sphere::new(record.x, record.y, record.z, record.radius)
    }
}

/// The result of one packing run, in the form consumed by renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackReport {
    /// The packed volume.
    pub volume: Volume,
    /// Spheres in acceptance order.
    pub spheres: Vec<SphereRecord>,
    /// Run statistics, absent for hand-written reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SolveSummary>,
}

impl PackReport {
    /// Builds a report from a finished run.
    pub fn from_result(volume: &Volume, result: &SolveResult<Sphere>) -> Self {
        Self {
            volume: *volume,
            spheres: result.placements.iter().map(SphereRecord::from).collect(),
            summary: Some(SolveSummary::from(result)),
        }
    }

    /// Returns the spheres as library values.
    pub fn spheres(&self) -> Vec<Sphere> {
        self.spheres.iter().copied().map(Sphere::from).collect()
    }

    /// Parses a JSON report.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Renders the spheres as CSV.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("x,y,z,radius\n");
        for s in &self.spheres {
            csv.push_str(&format!("{},{},{},{}\n", s.x, s.y, s.z, s.radius));
        }
        csv
    }

    /// Renders the report in the given format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Csv => Ok(self.to_csv()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphere_pack_core::{Config, Solver};
    use sphere_pack_d3::{validate_packing, SpherePacker};

    fn sample_report() -> PackReport {
        let volume = Volume::new(20.0, 10.0, 10.0);
        let packer = SpherePacker::new(Config::default().with_max_spheres(15).with_seed(3));
        let result = packer.solve(&volume).unwrap();
        PackReport::from_result(&volume, &result)
    }

    #[test]
    fn test_report_json_preserves_spheres() {
        let report = sample_report();
        let parsed = PackReport::from_json(&report.to_json().unwrap()).unwrap();

        assert_eq!(parsed.spheres, report.spheres);
        assert_eq!(parsed.volume, report.volume);
        assert_eq!(parsed.summary, report.summary);
        assert!(validate_packing(&parsed.volume, &parsed.spheres()).is_ok());
    }

    #[test]
    fn test_huge_volume_report_round_trips() {
        let volume = Volume::new(f64::MAX, f64::MAX, f64::MAX);
        let packer = SpherePacker::new(Config::default().with_max_spheres(4).with_seed(9));
        let result = packer.solve(&volume).unwrap();

        let json = PackReport::from_result(&volume, &result).to_json().unwrap();
        assert!(!json.contains("null"));

        let parsed = PackReport::from_json(&json).unwrap();
        assert!(parsed.summary.as_ref().unwrap().utilization_percent.is_finite());
        assert!(validate_packing(&parsed.volume, &parsed.spheres()).is_ok());
    }

    #[test]
    fn test_report_csv() {
        let report = sample_report();
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "x,y,z,radius");
        assert_eq!(lines.len(), report.spheres.len() + 1);
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 4);
        }
    }

    #[test]
    fn test_report_without_summary() {
        let json = r#"{
            "volume": { "dimensions": [10.0, 10.0, 10.0] },
            "spheres": [
                { "x": 2.0, "y": 2.0, "z": 2.0, "radius": 2.0 },
                { "x": 6.0, "y": 2.0, "z": 2.0, "radius": 2.0 }
            ]
        }"#;

        let report = PackReport::from_json(json).unwrap();
        assert!(report.summary.is_none());
        assert_eq!(report.spheres().len(), 2);
        assert!(validate_packing(&report.volume, &report.spheres()).is_ok());
    }

    #[test]
    fn test_malformed_report_rejected() {
        assert!(matches!(
            PackReport::from_json("{ \"spheres\": 3 }"),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_render_formats() {
        let report = sample_report();
        assert!(report.render(OutputFormat::Json).unwrap().starts_with('{'));
        assert!(report
            .render(OutputFormat::Csv)
            .unwrap()
            .starts_with("x,y,z,radius"));
    }
}
