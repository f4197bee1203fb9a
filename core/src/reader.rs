//! Follow-mode reading of the live log file.
//!
//! The game client keeps appending to the newest log while we read it, so
//! reaching the end of the file only means "nothing new yet". [`TailReader`]
//! turns end-of-file into a short sleep and a retry; [`LogLines`] splits
//! whatever arrives into lines.

use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, ReadBuf};
use tokio::time::{Duration, Sleep, sleep};

use crate::error::ScoutError;

/// How long to wait at end of file before checking for new bytes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// A file reader that never reports end of file.
///
/// Reads resolve as soon as at least one byte is available. When the file
/// has no new data the read stays pending, re-checking every poll interval.
/// Real I/O errors are returned immediately. The file handle is closed when
/// the reader is dropped.
pub struct TailReader {
    file: File,
    poll_interval: Duration,
    backoff: Option<Pin<Box<Sleep>>>,
}

impl TailReader {
    /// Open `path` for tailing from its first byte.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ScoutError> {
        let path = path.as_ref();
        let file = File::open(path).await.map_err(|source| ScoutError::OpenLog {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_file(file))
    }

    pub fn from_file(file: File) -> Self {
        Self {
            file,
            poll_interval: DEFAULT_POLL_INTERVAL,
            backoff: None,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl AsyncRead for TailReader {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if buf.remaining() == 0 {
            return Poll::Ready(Ok(()));
        }

        loop {
            if let Some(backoff) = this.backoff.as_mut() {
                ready!(backoff.as_mut().poll(cx));
                this.backoff = None;
            }

            let filled = buf.filled().len();
            ready!(Pin::new(&mut this.file).poll_read(cx, buf))?;
            if buf.filled().len() > filled {
                return Poll::Ready(Ok(()));
            }

            // At the current end of file: wait for the writer
            this.backoff = Some(Box::pin(sleep(this.poll_interval)));
        }
    }
}

/// Line splitter over any async byte source.
///
/// Bytes are decoded lossily so a stray non-UTF-8 sequence costs one line,
/// not the whole stream. Trailing `\n` / `\r\n` is stripped.
pub struct LogLines<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl LogLines<TailReader> {
    /// Follow the file at `path`.
    pub async fn follow(path: impl AsRef<Path>) -> Result<Self, ScoutError> {
        Ok(Self::new(TailReader::open(path).await?))
    }
}

impl<R: AsyncRead + Unpin> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buf: Vec::new(),
        }
    }

    /// Next complete line.
    ///
    /// Returns `Ok(None)` only when the underlying reader ends, which a
    /// [`TailReader`] never does.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 {
            return Ok(None);
        }

        let mut line = &self.buf[..];
        if let Some(stripped) = line.strip_suffix(b"\n") {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}
