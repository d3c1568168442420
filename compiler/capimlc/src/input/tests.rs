use super::*;

#[test]
fn from_text_keeps_path_and_content() {
    let file = SourceFile::from_text("cfg.capiml", "key: 1");
    assert_eq!(file.path(), Path::new("cfg.capiml"));
    assert_eq!(file.buffer().as_bytes(), b"key: 1");
}

#[test]
fn io_errors_are_classified() {
    let path = Path::new("x.capiml");
    let not_found = LoadError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(not_found, LoadError::NotFound { .. }));

    let denied = LoadError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(denied, LoadError::PermissionDenied { .. }));

    let bad_utf8 = LoadError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));
    assert!(matches!(bad_utf8, LoadError::InvalidUtf8 { .. }));

    let other = LoadError::from_io(path, io::Error::from(io::ErrorKind::Interrupted));
    assert!(matches!(other, LoadError::Io { .. }));
    assert_eq!(other.path(), path);
}

#[test]
fn error_messages_name_the_file() {
    let err = LoadError::NotFound {
        path: PathBuf::from("missing.capiml"),
    };
    assert_eq!(err.to_string(), "cannot find file 'missing.capiml'");

    let err = LoadError::InvalidUtf8 {
        path: PathBuf::from("bin.capiml"),
    };
    assert_eq!(err.to_string(), "'bin.capiml' contains invalid UTF-8 data");
}

#[test]
fn io_error_keeps_its_source() {
    use std::error::Error;
    let err = LoadError::Io {
        path: PathBuf::from("a.capiml"),
        source: io::Error::other("disk on fire"),
    };
    assert_eq!(err.to_string(), "error reading 'a.capiml': disk on fire");
    assert!(err.source().is_some());
}

#[test]
fn line_col_is_one_based() {
    let file = SourceFile::from_text("t.capiml", "ab\ncd\n\nx");
    assert_eq!(file.line_col(0), (1, 1));
    assert_eq!(file.line_col(1), (1, 2));
    assert_eq!(file.line_col(3), (2, 1));
    assert_eq!(file.line_col(4), (2, 2));
    assert_eq!(file.line_col(7), (4, 1));
}

#[test]
fn line_col_clamps_past_end() {
    let file = SourceFile::from_text("t.capiml", "ab");
    assert_eq!(file.line_col(100), (1, 3));
}
