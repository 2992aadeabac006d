//! Shared helpers for the command line tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file.

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};
use tempfile::TempDir;

/// Left half `(230, 20, 20)`, right half `(20, 20, 100)`. Quantizes to a `Vibrant` swatch of
/// `#e01010` and a `DarkVibrant` swatch of `#101060`, 800 pixels each.
pub fn two_tone_image() -> RgbImage {
    RgbImage::from_fn(40, 40, |x, _| {
        if x < 20 {
            Rgb([230, 20, 20])
        } else {
            Rgb([20, 20, 100])
        }
    })
}

pub fn solid_image(rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(16, 16, Rgb(rgb))
}

/// Save `image` as a PNG inside a fresh temporary directory.
pub fn write_png(image: &RgbImage) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("fixture.png");
    image.save(&path).expect("write png fixture");
    (dir, path)
}

pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vibrant"))
        .args(args)
        .output()
        .expect("run vibrant")
}

pub fn run_with_file(path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vibrant"))
        .args(args)
        .arg(path)
        .output()
        .expect("run vibrant")
}

pub fn run_with_stdin(bytes: &[u8], args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vibrant"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn vibrant");

    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(bytes)
        .expect("write stdin");

    child.wait_with_output().expect("wait for vibrant")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}
