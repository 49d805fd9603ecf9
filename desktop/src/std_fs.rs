use std::fs;

use embedded_io::ErrorType;
use log::info;
use pocketgfx_core::fs::Mode;

pub struct StdFilesystem {
    base_path: std::path::PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: std::path::PathBuf) -> Self {
        info!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

impl ErrorType for StdFilesystem {
    type Error = embedded_io::ErrorKind;
}

type Result<T> = core::result::Result<T, embedded_io::ErrorKind>;

fn kind(err: std::io::Error) -> embedded_io::ErrorKind {
    embedded_io::Error::kind(&err)
}

impl pocketgfx_core::fs::Filesystem for StdFilesystem {
    type File = StdFile;

    fn open_file(&self, path: &str, mode: Mode) -> Result<StdFile> {
        let path = self.base_path.join(path);
        let options = match mode {
            Mode::Read => fs::OpenOptions::new().read(true).clone(),
            Mode::Write => fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .clone(),
        };
        let file = options.open(path).map_err(kind)?;
        StdFile::new(file).map_err(kind)
    }

    fn create_dir_all(&self, path: &str) -> Result<()> {
        let path = self.base_path.join(path);
        std::fs::create_dir_all(path).map_err(kind)
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        fs::rename(self.base_path.join(from), self.base_path.join(to)).map_err(kind)
    }

    fn remove_file(&self, path: &str) -> Result<()> {
        fs::remove_file(self.base_path.join(path)).map_err(kind)
    }
}

pub struct StdFile {
    file: std::io::BufReader<std::fs::File>,
    size: usize,
}

impl StdFile {
    pub fn new(file: std::fs::File) -> std::io::Result<Self> {
        let size = file.metadata()?.len() as usize;
        Ok(StdFile {
            file: std::io::BufReader::new(file),
            size,
        })
    }
}

impl pocketgfx_core::fs::File for StdFile {
    fn size(&self) -> usize {
        self.size
    }
}

impl ErrorType for StdFile {
    type Error = std::io::Error;
}

impl embedded_io::Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}

impl embedded_io::Write for StdFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.get_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.get_mut().flush()
    }
}
