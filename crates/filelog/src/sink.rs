//! Buffered per-category file sink

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

/// Buffered writer over one file category's daily log file.
///
/// Bytes accumulate in memory and reach disk when the buffer fills or on an
/// explicit [`flush`](Self::flush). There is no closed state: a flushed sink
/// accepts further writes.
pub(crate) struct FileSink {
    writer: BufWriter<DatedFile>,
}

impl FileSink {
    pub(crate) fn new(dir: PathBuf, category: String) -> Self {
        Self {
            writer: BufWriter::new(DatedFile {
                dir,
                category,
                open: None,
            }),
        }
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Inner writer appending to `<dir>/<YYYY-MM-DD>_<category>.log`.
///
/// One handle is held per calendar day and reopened when the date at write
/// time no longer matches; dropping the stale handle closes it. Writes that
/// straddle midnight therefore land in two files without any explicit
/// rollover logic.
struct DatedFile {
    dir: PathBuf,
    category: String,
    open: Option<(NaiveDate, File)>,
}

impl DatedFile {
    fn file_for_today(&mut self) -> io::Result<&mut File> {
        let today = Local::now().date_naive();
        let stale = !matches!(&self.open, Some((date, _)) if *date == today);
        if stale {
            ensure_dir(&self.dir)?;
            let path = self.dir.join(format!("{today}_{}.log", self.category));
            self.open = Some((today, open_append(&path)?));
        }
        match &mut self.open {
            Some((_, file)) => Ok(file),
            None => Err(io::Error::other("log file handle missing")),
        }
    }
}

impl Write for DatedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let file = self.file_for_today()?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.open {
            Some((_, file)) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Missing directories are created best-effort; a creation failure shows up
/// as the subsequent open error. A stat failure other than `NotFound` is
/// returned as-is.
fn ensure_dir(dir: &Path) -> io::Result<()> {
    match fs::metadata(dir) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let _ = fs::create_dir_all(dir);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }
    options.open(path)
}
