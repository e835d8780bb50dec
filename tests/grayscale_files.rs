use std::fs;
use std::path::Path;

use gray_pipeline::image_pipeline::{
    ConversionConfig, ConversionError, GrayscalePipeline, batch_convert_directory,
    convert_to_grayscale, save_as_pgm,
};
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use tempfile::tempdir;

fn write_color(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 200]));
    img.save(path).unwrap();
}

#[test]
fn color_png_becomes_single_channel_with_same_size() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_color(&input, 5, 3);

    convert_to_grayscale(&input, &output).unwrap();

    let result = image::open(&output).unwrap();
    assert_eq!(result.color(), image::ColorType::L8);
    assert_eq!((result.width(), result.height()), (5, 3));
}

#[test]
fn output_format_follows_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_color(&input, 4, 4);

    for (name, format) in [
        ("out.bmp", ImageFormat::Bmp),
        ("out.JPG", ImageFormat::Jpeg),
        ("out.tiff", ImageFormat::Tiff),
    ] {
        let output = dir.path().join(name);
        convert_to_grayscale(&input, &output).unwrap();
        let bytes = fs::read(&output).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), format, "{name}");
    }
}

#[test]
fn batch_converts_only_recognised_extensions() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir(&src).unwrap();

    write_color(&src.join("a.png"), 2, 2);
    write_color(&src.join("b.JPG"), 2, 2);
    write_color(&src.join("c.bmp"), 2, 2);
    fs::write(src.join("notes.txt"), "hello").unwrap();
    fs::write(src.join("data.csv"), "1,2").unwrap();

    let report = batch_convert_directory(&src, &dst).unwrap();

    assert_eq!(report.converted.len(), 3);
    assert_eq!(report.skipped.len(), 2);
    let mut names: Vec<String> = fs::read_dir(&dst)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["gray_a.png", "gray_b.JPG", "gray_c.bmp"]);
}

#[test]
fn batch_creates_nested_destination_and_tolerates_existing() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    write_color(&src.join("a.png"), 2, 2);

    let dst = dir.path().join("out").join("nested");
    batch_convert_directory(&src, &dst).unwrap();
    assert!(dst.join("gray_a.png").is_file());

    let report = batch_convert_directory(&src, &dst).unwrap();
    assert_eq!(report.converted.len(), 1);
}

#[test]
fn batch_aborts_on_first_bad_file_by_default() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("broken.png"), b"not a png").unwrap();

    let result = batch_convert_directory(&src, &dst);

    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    assert!(!dst.join("gray_broken.png").exists());
}

#[test]
fn batch_can_continue_past_bad_files() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("broken.png"), b"not a png").unwrap();
    write_color(&src.join("good.png"), 3, 3);

    let config = ConversionConfig::builder().continue_on_error(true).build();
    let report = GrayscalePipeline::new(config)
        .batch_convert_directory(&src, &dst)
        .unwrap();

    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert!(!report.is_success());
    assert!(dst.join("gray_good.png").is_file());
    assert!(!dst.join("gray_broken.png").exists());
}

#[test]
fn batch_of_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let result = batch_convert_directory(dir.path().join("nope"), dir.path().join("dst"));
    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
}

#[test]
fn pgm_of_white_then_black_is_exact() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("wb.png");
    let output = dir.path().join("wb.pgm");
    let mut img = GrayImage::new(2, 1);
    img.put_pixel(0, 0, Luma([255]));
    img.put_pixel(1, 0, Luma([0]));
    img.save(&input).unwrap();

    save_as_pgm(&input, &output).unwrap();

    assert_eq!(fs::read(&output).unwrap(), b"P5\n2 1\n255\n\xFF\x00".to_vec());
}

#[test]
fn pgm_from_color_has_three_line_header_and_w_times_h_body() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("color.bmp");
    let output = dir.path().join("color.raw");
    write_color(&input, 7, 5);

    save_as_pgm(&input, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    let header = b"P5\n7 5\n255\n";
    assert!(bytes.starts_with(header));
    assert_eq!(bytes.len(), header.len() + 7 * 5);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.png");

    let result = convert_to_grayscale(dir.path().join("missing.png"), &output);

    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    assert!(!output.exists());
}

#[test]
fn undecodable_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.jpg");
    let output = dir.path().join("out.pgm");
    fs::write(&input, b"\x00\x01\x02garbage").unwrap();

    let result = save_as_pgm(&input, &output);

    assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    assert!(!output.exists());
}

#[test]
fn unknown_output_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.webm");
    write_color(&input, 2, 2);

    let result = convert_to_grayscale(&input, &output);

    assert!(matches!(result, Err(ConversionError::UnsupportedFormat(_))));
    assert!(!output.exists());
}

#[test]
fn batch_into_its_own_directory_converts_each_input_once() {
    let dir = tempdir().unwrap();
    let count = 300;
    for i in 0..count {
        GrayImage::from_pixel(1, 1, Luma([i as u8]))
            .save(dir.path().join(format!("img{i:03}.png")))
            .unwrap();
    }

    let report = batch_convert_directory(dir.path(), dir.path()).unwrap();

    assert_eq!(report.converted.len(), count);
    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2 * count);
    assert!(names.iter().all(|n| !n.starts_with("gray_gray_")));
}

#[test]
fn batch_skips_directory_named_like_an_image() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::create_dir_all(src.join("sub.png")).unwrap();
    write_color(&src.join("a.png"), 2, 2);

    let report = batch_convert_directory(&src, &dst).unwrap();

    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.skipped, vec![src.join("sub.png")]);
    assert!(!dst.join("gray_sub.png").exists());
}

#[test]
fn successful_conversion_leaves_only_the_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    write_color(&input, 3, 3);

    convert_to_grayscale(&input, out_dir.join("result.png")).unwrap();

    let names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["result.png"]);
}

#[test]
fn unwritable_destination_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("missing_dir").join("out.png");
    write_color(&input, 2, 2);

    let result = convert_to_grayscale(&input, &output);

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
    assert!(!output.exists());
}
