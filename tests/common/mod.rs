//! Shared test fixtures for the riskometer integration tests.
//!
//! Provides `setup_sample_file()` which writes a small CSV table to a temp
//! directory and returns a `Riskometer` reading it, plus helpers to build
//! in-memory observations.

#![allow(dead_code)]

use chrono::NaiveDate;
use riskometer::{Observation, Riskometer};
use std::fs;
use std::path::PathBuf;

/// Three rows, each 1096 days apart.
///
/// * `FLAT`: 100 -> 110 -> 121, equal growth in both windows.
/// * `GROWTH`: 100 -> 200 -> 250, strong then weak growth.
/// * `SPARSE`: price missing in 2014, so nothing qualifies.
pub const SAMPLE_CSV: &str = "\
DATE,FLAT,GROWTH,SPARSE
01/01/11,100,100,200
01/01/14,110,200,
01/01/17,121,250,242
";

/// Write `contents` as `data.csv` in a temp dir and open a `Riskometer` on it.
///
/// The caller must keep the `TempDir` alive for the duration of the test.
pub fn setup_file(contents: &str) -> (Riskometer, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = write_data_file(&tmp_dir, contents);
    let rm = Riskometer::builder().data_file(path).build().unwrap();
    (rm, tmp_dir)
}

pub fn setup_sample_file() -> (Riskometer, tempfile::TempDir) {
    setup_file(SAMPLE_CSV)
}

/// (Over)write `data.csv` in the given temp dir.
pub fn write_data_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).unwrap();
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn obs(y: i32, m: u32, d: u32, price: f64) -> Observation {
    Observation::new(date(y, m, d), Some(price))
}

pub fn missing(y: i32, m: u32, d: u32) -> Observation {
    Observation::new(date(y, m, d), None)
}

/// Month-start observations from `start_year`-01 for `months` months.
pub fn monthly(start_year: i32, months: u32, price: impl Fn(u32) -> f64) -> Vec<Observation> {
    (0..months)
        .map(|i| {
            let y = start_year + (i / 12) as i32;
            let m = i % 12 + 1;
            obs(y, m, 1, price(i))
        })
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Small deterministic generator so property-style tests need no extra crate.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}
