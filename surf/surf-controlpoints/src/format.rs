//! Control-point text format.
//!
//! A control-point file is line-oriented ASCII: one `x y z` coordinate line
//! per point, followed by a literal `info` marker line and two metadata
//! lines:
//!
//! ```text
//! 58.4497 -6.64394 -14.5253
//! 60.4497 -7.64394 -16.5253
//! -46.5503 -5.64394 -17.5253
//! info
//! numpoints 3
//! useRealRAS 1
//! ```
//!
//! Parsing is tolerant: unrecognized lines and malformed coordinate lines
//! are skipped without error. The declared `numpoints` value is carried as
//! metadata only and never bounds parsing; on write it is regenerated from
//! the actual point count.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{CpError, CpResult};

/// A parsed control-point file: the point set plus its metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointFile {
    /// Control-point coordinates, in file order.
    pub points: Vec<Point3<f64>>,

    /// The `numpoints` value the file declared, if any. Metadata only; may
    /// disagree with `points.len()` on malformed input.
    pub declared_count: Option<usize>,

    /// The `useRealRAS` flag: whether coordinates are in real anatomical
    /// RAS space rather than a surface-local convention.
    pub use_real_ras: bool,
}

impl ControlPointFile {
    /// Create a control-point set from points and a RAS flag.
    #[must_use]
    pub const fn from_points(points: Vec<Point3<f64>>, use_real_ras: bool) -> Self {
        Self {
            points,
            declared_count: None,
            use_real_ras,
        }
    }

    /// Number of points actually parsed.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Load a control-point file.
    ///
    /// # Errors
    ///
    /// Returns [`CpError::FileNotFound`] if the path does not exist and
    /// [`CpError::Io`] for any other read failure. Unparseable lines are
    /// skipped, not errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use surf_controlpoints::ControlPointFile;
    ///
    /// let cps = ControlPointFile::load("control.dat").unwrap();
    /// println!("{} points, RAS = {}", cps.point_count(), cps.use_real_ras);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> CpResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CpError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CpError::Io(e)
            }
        })?;
        let reader = BufReader::new(file);

        let mut points = Vec::new();
        let mut declared_count = None;
        let mut use_real_ras = false;

        for line in reader.lines() {
            let line = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts.as_slice() {
                ["numpoints", n, ..] => declared_count = n.parse::<usize>().ok(),
                ["useRealRAS", flag, ..] => {
                    use_real_ras = flag.parse::<i64>().map_or(false, |v| v != 0);
                }
                ["info", ..] => {}
                [x, y, z] => {
                    if let (Ok(x), Ok(y), Ok(z)) =
                        (x.parse::<f64>(), y.parse::<f64>(), z.parse::<f64>())
                    {
                        points.push(Point3::new(x, y, z));
                    }
                }
                _ => {}
            }
        }

        debug!(
            path = %path.display(),
            parsed = points.len(),
            declared = ?declared_count,
            "loaded control points"
        );

        Ok(Self {
            points,
            declared_count,
            use_real_ras,
        })
    }

    /// Save the point set in the control-point text format.
    ///
    /// Coordinates are written with fixed-point formatting; `numpoints` is
    /// written from the actual point count, not any declared value carried
    /// from a load.
    ///
    /// # Errors
    ///
    /// Returns [`CpError::Io`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CpResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for p in &self.points {
            writeln!(writer, "{:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "info")?;
        writeln!(writer, "numpoints {}", self.points.len())?;
        writeln!(writer, "useRealRAS {}", i32::from(self.use_real_ras))?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_basic() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "control.dat",
            "58.4497 -6.64394 -14.5253\n\
             60.4497 -7.64394 -16.5253\n\
             -46.5503 -5.64394 -17.5253\n\
             info\n\
             numpoints 3\n\
             useRealRAS 1\n",
        );

        let cps = ControlPointFile::load(&path).unwrap();
        assert_eq!(cps.point_count(), 3);
        assert_eq!(cps.declared_count, Some(3));
        assert!(cps.use_real_ras);
        assert_relative_eq!(cps.points[0].x, 58.4497, epsilon = 1e-10);
        assert_relative_eq!(cps.points[2].z, -17.5253, epsilon = 1e-10);
    }

    #[test]
    fn test_load_ras_flag_zero() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "control.dat",
            "1.0 2.0 3.0\ninfo\nnumpoints 1\nuseRealRAS 0\n",
        );

        let cps = ControlPointFile::load(&path).unwrap();
        assert!(!cps.use_real_ras);
    }

    #[test]
    fn test_load_tolerates_garbage_lines() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "control.dat",
            "1.0 2.0 3.0\n\
             not a coordinate line at all\n\
             4.0 5.0\n\
             a b c\n\
             \n\
             6.0 7.0 8.0\n\
             info\n\
             numpoints 2\n\
             useRealRAS 1\n",
        );

        let cps = ControlPointFile::load(&path).unwrap();
        assert_eq!(cps.point_count(), 2);
        assert_eq!(cps.points[1], Point3::new(6.0, 7.0, 8.0));
    }

    #[test]
    fn test_declared_count_is_metadata_only() {
        // Declared count disagrees with the coordinate lines; both survive
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "control.dat",
            "1.0 2.0 3.0\ninfo\nnumpoints 9\nuseRealRAS 1\n",
        );

        let cps = ControlPointFile::load(&path).unwrap();
        assert_eq!(cps.point_count(), 1);
        assert_eq!(cps.declared_count, Some(9));
    }

    #[test]
    fn test_load_missing_metadata() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "control.dat", "1.0 2.0 3.0\n");

        let cps = ControlPointFile::load(&path).unwrap();
        assert_eq!(cps.point_count(), 1);
        assert_eq!(cps.declared_count, None);
        assert!(!cps.use_real_ras);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = ControlPointFile::load(dir.path().join("absent.dat"));
        assert!(matches!(result, Err(CpError::FileNotFound { .. })));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.dat");

        let original = ControlPointFile::from_points(
            vec![
                Point3::new(58.4497, -6.64394, -14.5253),
                Point3::new(-46.5503, -5.64394, -17.5253),
            ],
            true,
        );
        original.save(&path).unwrap();

        let loaded = ControlPointFile::load(&path).unwrap();
        assert_eq!(loaded.point_count(), 2);
        assert_eq!(loaded.declared_count, Some(2));
        assert!(loaded.use_real_ras);
        for (a, b) in original.points.iter().zip(&loaded.points) {
            // Fixed-point output keeps six decimals
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_save_writes_expected_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.dat");

        let cps = ControlPointFile::from_points(vec![Point3::new(1.0, 2.0, 3.0)], false);
        cps.save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "1.000000 2.000000 3.000000");
        assert_eq!(lines[1], "info");
        assert_eq!(lines[2], "numpoints 1");
        assert_eq!(lines[3], "useRealRAS 0");
    }
}
