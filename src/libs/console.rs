//! The text device the menu talks through.
//!
//! [`Console`] pairs a line-oriented input with an output sink. The terminal
//! binds it to stdin/stdout; tests bind it to a byte slice and a `Vec<u8>`
//! to script a whole session and read back the transcript.

use std::fmt::Display;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

pub struct Console<R, W> {
    input: R,
    output: W,
}

pub type Terminal = Console<BufReader<Stdin>, Stdout>;

impl Terminal {
    pub fn terminal() -> Self {
        Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub async fn say(&mut self, line: impl Display) -> io::Result<()> {
        self.output.write_all(format!("{}\n", line).as_bytes()).await?;
        self.output.flush().await
    }

    /// Writes `question` on its own line and waits for one line of answer.
    ///
    /// The line terminator is stripped; other whitespace is left to the caller.
    pub async fn ask(&mut self, question: impl Display) -> io::Result<Option<String>> {
        self.say(question).await?;
        self.read_line().await
    }

    /// Waits for one line of input, `None` once the input is exhausted.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);

        Ok(Some(line))
    }

    /// Flushes and shuts down the output, releases the input and hands the
    /// output back.
    pub async fn close(mut self) -> io::Result<W> {
        self.output.shutdown().await?;
        Ok(self.output)
    }
}
