use std::fs;

use clap::Parser;
use flame::cli::{self, Mode, RenderArgs};
use flame::output::write_image;
use flame::{
    presets, render, render_parallel, AffineTransformation, Color, FlameBuilder,
    FlameTransformation, FlameTransformationBuilder, Palette, Point, Rectangle, Variation,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[test]
fn empty_flame_is_dark_everywhere() {
    let frame = Rectangle::new(Point::new(3.0, -1.0), 7.0, 2.0).unwrap();
    let acc = render(&[], frame, 13, 9, 20, &mut StdRng::seed_from_u64(5)).unwrap();
    for x in 0..acc.width() {
        for y in 0..acc.height() {
            assert_eq!(acc.intensity(x, y), Ok(0.0));
            assert_eq!(acc.color(&Palette::fire(), Color::BLACK, x, y), Ok(Color::BLACK));
        }
    }
}

#[test]
fn identity_flame_hits_only_the_origin_cell() {
    let identity =
        FlameTransformation::new(AffineTransformation::IDENTITY, &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap();
    let frame = Rectangle::new(Point::ORIGIN, 3.0, 3.0).unwrap();
    let acc = render(&[identity], frame, 7, 5, 1, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(acc.hit_count(3, 2), Ok(35));
    assert_eq!(acc.intensity(3, 2), Ok(1.0));
    for x in 0..7 {
        for y in 0..5 {
            if (x, y) != (3, 2) {
                assert_eq!(acc.hit_count(x, y), Ok(0));
            }
        }
    }
}

#[test]
fn presets_land_mostly_inside_their_frames() {
    for name in presets::NAMES {
        let preset = presets::by_name(name).unwrap();
        let acc = preset
            .flame
            .render(preset.frame, 40, 30, 20, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let drawn = 40 * 30 * 20;
        assert!(
            acc.total_hits() * 2 > drawn,
            "{name}: only {} of {drawn} samples kept",
            acc.total_hits()
        );
    }
}

#[test]
fn parallel_and_serial_agree_statistically() {
    let preset = presets::turbulence().unwrap();
    let transformations = preset.flame.transformations();
    let serial = render(transformations, preset.frame, 32, 32, 40, &mut StdRng::seed_from_u64(1))
        .unwrap();
    let parallel = render_parallel(transformations, preset.frame, 32, 32, 40, 8, 1).unwrap();

    let (s, p) = (serial.total_hits() as f64, parallel.total_hits() as f64);
    assert!((s - p).abs() / s < 0.05, "serial kept {s}, parallel kept {p}");

    // Same shape: the cells each render lights up mostly coincide.
    let lit = |acc: &flame::Accumulator, x, y| acc.hit_count(x, y).unwrap() > 0;
    let mut both = 0;
    let mut either = 0;
    for x in 0..32 {
        for y in 0..32 {
            let (a, b) = (lit(&serial, x, y), lit(&parallel, x, y));
            both += usize::from(a && b);
            either += usize::from(a || b);
        }
    }
    assert!(both * 10 >= either * 8, "overlap {both}/{either}");
}

#[test]
fn edited_flame_renders_like_the_original() {
    let preset = presets::shark_fin().unwrap();
    let mut builder = FlameBuilder::from(&preset.flame);
    let extra = builder.add_transformation(FlameTransformationBuilder::new());
    builder
        .set_variation_weight(extra, Variation::Spherical, 1.0)
        .unwrap();
    builder.remove_transformation(extra).unwrap();
    assert_eq!(builder.build(), preset.flame);
}

#[test]
fn writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shark.png");
    let preset = presets::shark_fin().unwrap();
    let acc = preset
        .flame
        .render(preset.frame, 50, 40, 10, &mut StdRng::seed_from_u64(8))
        .unwrap();
    write_image(&acc, &Palette::rgb(), Color::WHITE, &path).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[..8], PNG_MAGIC);
}

#[test]
fn command_line_run_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");
    let args = |out: &std::path::Path| {
        RenderArgs::try_parse_from([
            "flame-serial",
            "--preset",
            "ifs",
            "--width",
            "48",
            "--height",
            "32",
            "--density",
            "5",
            "--palette",
            "random",
            "--seed",
            "99",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap()
    };
    let a = cli::run(&args(&first), Mode::Serial).unwrap();
    let b = cli::run(&args(&second), Mode::Serial).unwrap();
    assert_eq!(a, b);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let parallel = cli::run(&args(&first), Mode::Parallel).unwrap();
    assert_eq!(parallel.width(), 48);
    assert!(parallel.total_hits() > 0);
}
