use crate::error::GeneratorError;
use log::{info, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes `text` byte for byte, replacing whatever was at `path`.
///
/// If the write fails and this call created the file, the partial file is
/// removed. Paths that already existed (including device files) are left.
pub fn write_output(path: &Path, text: &str) -> Result<(), GeneratorError> {
    let created = !path.exists();

    let file = File::create(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_contents(file, path, created, text)?;

    info!("Wrote {} ({} bytes)", path.display(), text.len());

    Ok(())
}

fn write_contents<W: Write>(
    mut writer: W,
    path: &Path,
    created: bool,
    text: &str,
) -> Result<(), GeneratorError> {
    if let Err(source) = writer.write_all(text.as_bytes()) {
        drop(writer);
        if created {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("Could not remove partial {}: {}", path.display(), remove_err);
            }
        }

        return Err(GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build_info.h");

        write_output(&path, "#define A \"1\"\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"#define A \"1\"\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build_info.h");
        fs::write(&path, "a much longer previous header\nwith two lines\n").unwrap();

        write_output(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("build_info.h");

        let result = write_output(&path, "x\n");

        match result {
            Err(GeneratorError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_removes_created_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build_info.h");
        File::create(&path).unwrap();

        let result = write_contents(FullDisk, &path, true, "#define A \"1\"\n");

        match result {
            Err(GeneratorError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_keeps_preexisting_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build_info.h");
        fs::write(&path, "").unwrap();

        let result = write_contents(FullDisk, &path, false, "#define A \"1\"\n");

        assert!(matches!(result, Err(GeneratorError::Io { .. })));
        assert!(path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_not_removed() {
        let device = Path::new("/dev/full");
        if !device.exists() {
            return;
        }

        let result = write_output(device, "#define A \"1\"\n");

        assert!(matches!(result, Err(GeneratorError::Io { .. })));
        assert!(device.exists());
    }
}
