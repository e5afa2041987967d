/// A bidirectional stream of text lines.
///
/// Frames never contain the terminating newline: `send` appends it and
/// `recv` strips it.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, line: &str) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<String>;
}

pub mod in_memory;
pub mod tcp;
