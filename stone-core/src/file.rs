use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Render the file and write it to disk.
    ///
    /// Nothing touches the destination unless rendering succeeds.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        let content = self.render()?;
        write_atomic(&path, &content)?;
        Ok(path)
    }
}

/// Write `content` to `path` so readers see either the old file or the new one.
///
/// The content goes to a temporary file in the destination directory which
/// then replaces the destination. The temporary file is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;

    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("failed to stage output in '{}'", dir.display()))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use eyre::eyre;
    use tempfile::TempDir;

    use super::*;

    struct Fixed(Result<&'static str, &'static str>);

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join("routes.js")
        }

        fn render(&self) -> Result<String> {
            self.0.map(str::to_string).map_err(|e| eyre!(e))
        }
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_atomic(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_atomic_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_atomic_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        write_atomic(&temp.path().join("test.txt"), "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let path = Fixed(Ok("var routes = {};\n")).write(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("out").join("routes.js"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "var routes = {};\n");
    }

    #[test]
    fn test_generated_file_render_failure_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("routes.js");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        assert!(Fixed(Err("broken model")).write(temp.path()).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_generated_file_render_failure_creates_nothing() {
        let temp = TempDir::new().unwrap();

        assert!(Fixed(Err("broken model")).write(temp.path()).is_err());

        assert!(!temp.path().join("out").exists());
    }
}
