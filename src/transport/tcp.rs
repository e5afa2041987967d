use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::config::MAX_LINE_LEN;
use crate::transport::Transport;

/// Newline-delimited text over a TCP stream. Reads block until a full line
/// arrives; there is no timeout.
pub struct TcpTransport {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    max_line_len: usize,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_max_line_len(stream, MAX_LINE_LEN)
    }

    pub fn with_max_line_len(stream: TcpStream, max_line_len: usize) -> Self {
        let (read, writer) = stream.into_split();
        Self {
            reader: BufReader::new(read),
            writer,
            max_line_len,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::ConnectionReset => {
            anyhow::anyhow!("Connection closed by peer")
        }
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        if line.len() > self.max_line_len {
            return Err(anyhow::anyhow!(
                "Line too long: {} bytes (max: {})",
                line.len(),
                self.max_line_len
            ));
        }
        let mut frame = String::with_capacity(line.len() + 1);
        frame.push_str(line);
        frame.push('\n');
        self.writer.write_all(frame.as_bytes()).await.map_err(io_error)?;
        self.writer.flush().await.map_err(io_error)?;
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        // One byte past the limit so an oversized line is detected rather than split.
        let limit = self.max_line_len as u64 + 1;
        let n = (&mut self.reader)
            .take(limit)
            .read_line(&mut line)
            .await
            .map_err(io_error)?;
        if n == 0 {
            return Err(anyhow::anyhow!("Connection closed by peer"));
        }
        if !line.ends_with('\n') && n as u64 >= limit {
            return Err(anyhow::anyhow!(
                "Line too long (max: {} bytes)",
                self.max_line_len
            ));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
