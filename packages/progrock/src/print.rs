use std::io::Write;

use anyhow::Context as _;

use crate::{ProgressState, RenderOptions};

impl ProgressState {
    /// Write the bar to `sink` with [`RenderOptions::DEFAULT`],
    /// see [`write_with`](Self::write_with)
    #[inline(always)]
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> crate::Result<()> {
        self.write_with(sink, &RenderOptions::DEFAULT)
    }

    /// Write `\r` followed by the rendered bar to `sink`, then flush.
    ///
    /// If the bar is done, the line is terminated with `\n`, so the next
    /// output starts on a new line instead of overwriting the bar.
    ///
    /// ```rust
    /// # use progrock::ProgressState;
    /// # fn main() -> progrock::Result<()> {
    /// let mut out = Vec::new();
    /// ProgressState::new(50).mark_done().write_to(&mut out)?;
    /// assert!(out.starts_with(b"\r 0/50"));
    /// assert!(out.ends_with(b"--:--\n"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_with<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        options: &RenderOptions,
    ) -> crate::Result<()> {
        let text = self.render_with(options);
        log::trace!("writing progress bar: {}/{}", self.progress(), self.total());
        write!(sink, "\r{text}").context("failed to write progress bar")?;
        if self.is_done() {
            log::debug!("progress bar done at {}/{}", self.progress(), self.total());
            writeln!(sink).context("failed to write progress bar")?;
        }
        sink.flush().context("failed to flush progress bar")
    }

    /// Write the bar to stdout with [`RenderOptions::DEFAULT`]
    #[inline(always)]
    pub fn print(&self) -> crate::Result<()> {
        self.print_with(&RenderOptions::DEFAULT)
    }

    /// Write the bar to stdout with the given options
    pub fn print_with(&self, options: &RenderOptions) -> crate::Result<()> {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        self.write_with(&mut stdout, options)
    }
}
