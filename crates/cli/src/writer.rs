//! Report output: one ranked text file per zero count, plus an optional table.
//!
//! Text files are named `keggin_{zeros}zeros_{count}.txt` and hold one line per
//! orbit: `{rank}. {label} {distance}`, rank starting at 1.
//!
//! Label and distance are separated by exactly one space. Older report files
//! carried a trailing space after the label (`1. 2(5,7)  754.0`); ordering
//! and values are the same, only the whitespace differs.

use anyhow::{bail, Context, Result};
use keggin::api::{format_distance, ZeroCountReport};
use polars::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn report_file_name(report: &ZeroCountReport) -> String {
    format!(
        "keggin_{}zeros_{}.txt",
        report.zero_count,
        report.rankings.len()
    )
}

/// `true` if `out` is an existing directory (a finished run); error if some other file is there.
pub fn out_dir_exists(out: &Path) -> Result<bool> {
    if out.is_dir() {
        return Ok(true);
    }
    if out.exists() {
        bail!("{} exists and is not a directory", out.display());
    }
    Ok(false)
}

pub fn create_out_dir(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))
}

/// Write the ranked lines of `report` into `dir`; returns the file path.
pub fn write_report(dir: &Path, report: &ZeroCountReport) -> Result<PathBuf> {
    let path = dir.join(report_file_name(report));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    for (ix, row) in report.rankings.iter().enumerate() {
        writeln!(w, "{}. {} {}", ix + 1, row.label, format_distance(row.value))?;
    }
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// All rankings as one frame: `zeros, rank, label, distance, orbit_size`.
pub fn rankings_frame(reports: &[ZeroCountReport]) -> PolarsResult<DataFrame> {
    let mut zeros: Vec<u32> = Vec::new();
    let mut ranks: Vec<u32> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut distances: Vec<f64> = Vec::new();
    let mut sizes: Vec<u32> = Vec::new();
    for report in reports {
        for (ix, row) in report.rankings.iter().enumerate() {
            zeros.push(report.zero_count as u32);
            ranks.push(ix as u32 + 1);
            labels.push(row.label.clone());
            distances.push(row.value);
            sizes.push(row.orbit.size() as u32);
        }
    }
    df!(
        "zeros" => zeros,
        "rank" => ranks,
        "label" => labels,
        "distance" => distances,
        "orbit_size" => sizes,
    )
}

/// Export all rankings to `path`: Parquet for `.parquet`, CSV otherwise.
pub fn write_table(path: &Path, reports: &[ZeroCountReport]) -> Result<()> {
    let mut df = rankings_frame(reports)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keggin::api::{run, RunCfg};
    use tempfile::tempdir;

    fn reports() -> Vec<ZeroCountReport> {
        run(&RunCfg {
            min_zeros: 1,
            max_zeros: 3,
        })
        .unwrap()
        .reports
    }

    #[test]
    fn report_files_are_named_by_zeros_and_count() {
        let r = reports();
        let names: Vec<String> = r.iter().map(report_file_name).collect();
        assert_eq!(
            names,
            vec![
                "keggin_1zeros_1.txt",
                "keggin_2zeros_5.txt",
                "keggin_3zeros_13.txt"
            ]
        );
    }

    #[test]
    fn write_report_emits_ranked_lines() {
        let dir = tempdir().unwrap();
        let r = reports();
        let path = write_report(dir.path(), &r[1]).unwrap();
        let text = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1. 2(1,12) 754.0",
                "2. 2(1,7) 653.0",
                "3. 2(1,8) 653.0",
                "4. 2(1,3) 533.1",
                "5. 2(1,2) 377.0",
            ]
        );
    }

    #[test]
    fn existing_out_dir_is_left_alone() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out_keggin");
        assert!(!out_dir_exists(&out).unwrap());
        create_out_dir(&out).unwrap();
        fs::write(out.join("marker"), "keep").unwrap();
        assert!(out_dir_exists(&out).unwrap());
        assert_eq!(fs::read_to_string(out.join("marker")).unwrap(), "keep");

        let file = dir.path().join("plain");
        fs::write(&file, "").unwrap();
        assert!(out_dir_exists(&file).is_err());
    }

    #[test]
    fn frame_has_one_row_per_orbit() {
        let df = rankings_frame(&reports()).unwrap();
        assert_eq!(df.height(), 1 + 5 + 13);
        assert_eq!(df.width(), 5);
    }

    #[test]
    fn csv_table_round_trips_row_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tables/rankings.csv");
        write_table(&path, &reports()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("zeros,rank,label,distance,orbit_size"));
        assert_eq!(lines.count(), 19);
    }
}
