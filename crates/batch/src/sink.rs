use chart::{render, ChartSpec, ImageFormat, PlotError};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Destination for finished charts.
///
/// `show` is synchronous: the next size is not loaded until it returns.
pub trait ChartSink {
    fn show(&mut self, size: u32, chart: &ChartSpec) -> Result<(), PlotError>;
}

/// What [`FileSink`] does after writing a chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaitMode {
    /// Continue with the next size straight away.
    #[default]
    None,
    /// Block until a line (or EOF) is read from stdin. No timeout.
    Enter,
}

/// Renders every chart to an image file in `out_dir`.
pub struct FileSink {
    out_dir: PathBuf,
    format: ImageFormat,
    wait: WaitMode,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>, format: ImageFormat, wait: WaitMode) -> Self {
        Self {
            out_dir: out_dir.into(),
            format,
            wait,
            written: Vec::new(),
        }
    }

    /// Image path for a chart of `size`.
    pub fn output_path(&self, size: u32, diff_mode: bool) -> PathBuf {
        self.out_dir.join(format!(
            "size-{}-iterations{}.{}",
            size,
            if diff_mode { "-diff" } else { "" },
            self.format.extension()
        ))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for FileSink {
    fn show(&mut self, size: u32, chart: &ChartSpec) -> Result<(), PlotError> {
        fs::create_dir_all(&self.out_dir)?;

        let path = self.output_path(size, chart.diff_mode);
        render(chart, &path, self.format)?;
        log::info!("wrote {}", path.display());
        self.written.push(path);

        if self.wait == WaitMode::Enter {
            let last = self.written.last().map(PathBuf::as_path);
            wait_for_enter(&mut io::stdin().lock(), &mut io::stderr(), last)?;
        }

        Ok(())
    }
}

/// Prompts on `prompt` and blocks until a full line or EOF arrives on `input`.
pub(crate) fn wait_for_enter(
    input: &mut impl BufRead,
    prompt: &mut impl Write,
    chart: Option<&Path>,
) -> io::Result<()> {
    if let Some(chart) = chart {
        write!(prompt, "{} written, press Enter to continue", chart.display())?;
    } else {
        write!(prompt, "press Enter to continue")?;
    }
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_follow_size_and_mode() {
        let sink = FileSink::new("plots", ImageFormat::Png, WaitMode::None);
        assert_eq!(
            sink.output_path(4, false),
            Path::new("plots").join("size-4-iterations.png")
        );

        let sink = FileSink::new("plots", ImageFormat::Svg, WaitMode::None);
        assert_eq!(
            sink.output_path(6, true),
            Path::new("plots").join("size-6-iterations-diff.svg")
        );
    }

    #[test]
    fn wait_returns_after_one_line() {
        let mut input = io::Cursor::new(b"\nleft over\n".to_vec());
        let mut prompt = Vec::new();

        wait_for_enter(&mut input, &mut prompt, Some(Path::new("a.png"))).unwrap();

        assert_eq!(input.position(), 1);
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "a.png written, press Enter to continue"
        );
    }

    #[test]
    fn wait_accepts_eof() {
        let mut input = io::Cursor::new(Vec::new());
        let mut prompt = Vec::new();

        wait_for_enter(&mut input, &mut prompt, None).unwrap();
        assert_eq!(String::from_utf8(prompt).unwrap(), "press Enter to continue");
    }
}
