use tinycanvas::canvas::{Color, PixelBuffer};
use tinycanvas::io::{IoError, load_image, save_image};

fn sample() -> PixelBuffer {
    let mut buf = PixelBuffer::new(5, 3);
    buf.set(0, 0, Color::rgb(237, 28, 36));
    buf.set(4, 2, Color::rgb(0, 162, 232));
    buf.set(2, 1, Color::BLACK);
    buf
}

#[test]
fn test_bmp_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("artwork.bmp");
    let buf = sample();

    save_image(&buf, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 5);
    assert_eq!(loaded.height(), 3);
    assert_eq!(loaded, buf);
}

#[test]
fn test_bmp_round_trip_keeps_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("artwork.bmp");
    let mut buf = sample();
    buf.set(1, 1, Color::new(10, 20, 30, 128));
    buf.set(3, 0, Color::new(200, 100, 50, 1));
    buf.set(3, 2, Color::TRANSPARENT);

    save_image(&buf, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.get(1, 1), Color::new(10, 20, 30, 128));
    assert_eq!(loaded.get(3, 0), Color::new(200, 100, 50, 1));
    assert_eq!(loaded.get(3, 2), Color::TRANSPARENT);
    assert_eq!(loaded, buf);
}

#[test]
fn test_png_round_trip_keeps_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    let mut buf = sample();
    buf.set(1, 1, Color::new(10, 20, 30, 128));

    save_image(&buf, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.get(1, 1), Color::new(10, 20, 30, 128));
    assert_eq!(loaded, buf);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_image(&dir.path().join("nope.bmp"));
    assert!(matches!(result, Err(IoError::Image(_)) | Err(IoError::Io(_))));
}

#[test]
fn test_load_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.bmp");
    std::fs::write(&path, b"definitely not a bitmap").unwrap();
    assert!(load_image(&path).is_err());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("artwork.bmp");
    let err = save_image(&sample(), &path).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
    assert!(!err.to_string().is_empty());
}
