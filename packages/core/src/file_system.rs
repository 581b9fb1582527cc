// File System Abstraction
//
// The slice of file-system behavior the generator needs, behind a trait so
// tests can observe writes without touching disk. Writes overwrite
// wholesale: no atomic rename, no backup, no merge with prior content.

use std::fs;
use std::io;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    fn read_file(&self, path: &Path) -> io::Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// File system backed by `std::fs`.
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for OsFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub mod testing {
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::FileSystem;

    /// In-memory file system capturing writes for assertions.
    pub struct MockFileSystem {
        files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    }

    impl MockFileSystem {
        pub fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
            }
        }

        pub fn init_with_files(&self, files: Vec<(&str, &str)>) {
            let mut tree = self.files.lock().unwrap();
            for (path, content) in files {
                tree.insert(PathBuf::from(path), content.as_bytes().to_vec());
            }
        }

        /// Contents written to `path`, if any.
        pub fn written(&self, path: &Path) -> Option<String> {
            let tree = self.files.lock().unwrap();
            tree.get(path)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }

        /// Number of files currently stored.
        pub fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_file(&self, path: &Path) -> io::Result<String> {
            let tree = self.files.lock().unwrap();
            match tree.get(path) {
                Some(bytes) => String::from_utf8(bytes.clone())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                None => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )),
            }
        }

        fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
            let mut tree = self.files.lock().unwrap();
            tree.insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    /// File system whose writes always fail, for exercising the diagnostic
    /// path.
    pub struct FailingFileSystem;

    impl FailingFileSystem {
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for FailingFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FileSystem for FailingFileSystem {
        fn read_file(&self, path: &Path) -> io::Result<String> {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        }

        fn write_file(&self, path: &Path, _data: &[u8]) -> io::Result<()> {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only file system: {}", path.display()),
            ))
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }
}
