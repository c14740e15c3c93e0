//! End-to-end runs of the default plot.

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use bezier_raster::basics::PointD;
use bezier_raster::bmp::load_bmp;
use bezier_raster::curves::{sample_curve, sample_param};
use bezier_raster::plot::render_plot;
use bezier_raster::trans_viewport::TransViewport;
use bezier_raster::{run, PlotConfig};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const GRAY: [u8; 4] = [128, 128, 128, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "bezier-raster-it-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &Path) -> PlotConfig {
    PlotConfig {
        output: dir.join("out.bmp"),
        backup: dir.join("old.bmp"),
        ..PlotConfig::default()
    }
}

#[test]
fn default_curve_endpoints() {
    let config = PlotConfig::default();
    let polygon = config.control_polygon().unwrap();
    let samples = sample_curve(&polygon, config.resolution).unwrap();
    assert_eq!(samples.len(), 200);

    let first = samples.first().unwrap();
    let last = samples.last().unwrap();
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.y, 1.0, epsilon = 1e-9);

    let vp = TransViewport::new(config.width, config.height, config.margin).unwrap();
    let p0 = vp.to_pixel(*first);
    let p1 = vp.to_pixel(*last);
    assert_abs_diff_eq!(p0.x, 20.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p0.y, 1004.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p1.x, 1004.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p1.y, 20.0, epsilon = 1e-6);
}

#[test]
fn default_image_layout() {
    let config = PlotConfig::default();
    let img = render_plot(&config).unwrap();
    assert_eq!((img.width(), img.height()), (1024, 1024));

    // Corners of the canvas stay background.
    assert_eq!(img.pixel(0, 0), BLACK);
    assert_eq!(img.pixel(1023, 1023), BLACK);
    assert_eq!(img.pixel(1023, 0), BLACK);

    // First control point at (20, 1004): gray ring, white core.
    assert_eq!(img.pixel(20, 1004), WHITE);
    assert_eq!(img.pixel(15, 999), GRAY);
    assert_eq!(img.pixel(24, 1008), GRAY);
    assert_eq!(img.pixel(14, 1004), BLACK);

    // Last control point at (1004, 20).
    assert_eq!(img.pixel(1004, 20), WHITE);
    assert_eq!(img.pixel(1008, 24), GRAY);

    // A curve sample away from every control point is drawn as a white dot.
    let polygon = config.control_polygon().unwrap();
    let vp = TransViewport::new(config.width, config.height, config.margin).unwrap();
    let mid = vp.to_pixel(polygon.eval(sample_param(100, config.resolution)));
    assert_eq!(img.pixel(mid.x.floor() as u32, mid.y.floor() as u32), WHITE);

    // The curve never enters the top-left quadrant of the unit square.
    let probe = vp.to_pixel(PointD::new(0.1, 0.9));
    assert_eq!(img.pixel(probe.x as u32, probe.y as u32), BLACK);
}

#[test]
fn first_run_writes_output_only() {
    let dir = scratch_dir("first");
    let config = config_in(&dir);

    run(&config).unwrap();
    let written = load_bmp(&config.output).unwrap();
    assert_eq!(written, render_plot(&config).unwrap());
    assert!(!config.backup.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn existing_output_becomes_backup() {
    let dir = scratch_dir("rotate");
    let config = config_in(&dir);
    fs::write(&config.output, b"previous run").unwrap();

    run(&config).unwrap();
    assert_eq!(fs::read(&config.backup).unwrap(), b"previous run");
    assert!(load_bmp(&config.output).is_ok());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn existing_backup_is_replaced() {
    let dir = scratch_dir("replace");
    let config = config_in(&dir);
    fs::write(&config.backup, b"two runs ago").unwrap();
    fs::write(&config.output, b"previous run").unwrap();

    run(&config).unwrap();
    assert_eq!(fs::read(&config.backup).unwrap(), b"previous run");
    let fresh = fs::read(&config.output).unwrap();
    assert_eq!(&fresh[0..2], b"BM");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn second_run_keeps_first_as_backup() {
    let dir = scratch_dir("twice");
    let first = PlotConfig {
        resolution: 3,
        ..config_in(&dir)
    };
    let second = PlotConfig {
        resolution: 50,
        ..config_in(&dir)
    };

    run(&first).unwrap();
    run(&second).unwrap();
    assert_eq!(load_bmp(&second.backup).unwrap(), render_plot(&first).unwrap());
    assert_eq!(load_bmp(&second.output).unwrap(), render_plot(&second).unwrap());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn config_file_overrides() {
    let dir = scratch_dir("config");
    let path = dir.join("plot.toml");
    fs::write(
        &path,
        format!(
            "width = 128\nheight = 64\nmargin = 8\nresolution = 16\n\
             control_points = [[0.0, 1.0], [1.0, 0.0]]\n\
             output = {:?}\nbackup = {:?}\n",
            dir.join("line.bmp"),
            dir.join("line.old.bmp")
        ),
    )
    .unwrap();

    let config = PlotConfig::load(&path).unwrap();
    let summary = run(&config).unwrap();
    assert_eq!((summary.width, summary.height), (128, 64));
    assert_eq!(summary.samples, 16);

    let img = load_bmp(&dir.join("line.bmp")).unwrap();
    // (0, 1) maps to the top-left interior corner.
    assert_eq!(img.pixel(8, 8), WHITE);
    fs::remove_dir_all(&dir).unwrap();
}
