use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Generated source text, written with `write!` and `writeln!`.
pub struct Output(String);

impl Output {
    pub fn new() -> Self {
        Output(String::new())
    }

    pub fn write_fmt(&mut self, arguments: fmt::Arguments) {
        fmt::Write::write_fmt(&mut self.0, arguments).unwrap();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::new()
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Replaces `path` with `contents` through a temporary file in the same
/// directory, so readers see either the old file or the complete new one.
///
/// The parent directory is not created.
pub fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !fs::metadata(dir)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        ));
    }
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_ref())?;
    // Temporary files are created 0600; generated sources should stay readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path).map_or(0o644, |meta| meta.permissions().mode() & 0o7777);
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
