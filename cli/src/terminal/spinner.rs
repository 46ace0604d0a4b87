use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pulse_common::network::status::Status;
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::{colors, print::PRINT_TARGET};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn start_probe_spinner(total: usize) -> ProgressBar {
    let pb = SPINNER.get_or_init(init_spinner).clone();
    pb.set_message(format!("Probing {} targets...", total.to_string().bold()));
    pb
}

pub fn report_probe_progress(done: usize, total: usize, name: &str, status: Status) {
    let Some(pb) = SPINNER.get() else {
        return;
    };
    let status: ColoredString = match status {
        Status::Up => status.as_str().color(colors::STATUS_UP),
        Status::Down => status.as_str().color(colors::STATUS_DOWN),
    };
    pb.set_message(format!(
        "{} is {} ({}/{})",
        name.color(colors::PRIMARY),
        status,
        done,
        total
    ));
}

/// Routes log output above the spinner while it is drawing.
///
/// Report lines go to stdout and diagnostics to stderr once it is gone.
pub struct TerminalWriter;

impl<'a> MakeWriter<'a> for TerminalWriter {
    type Writer = SpinnerWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SpinnerWriter { to_stdout: false }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        SpinnerWriter {
            to_stdout: meta.target() == PRINT_TARGET,
        }
    }
}

pub struct SpinnerWriter {
    to_stdout: bool,
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() && !pb.is_hidden() => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            _ if self.to_stdout => io::stdout().write(buf),
            _ => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.to_stdout {
            io::stdout().flush()
        } else {
            io::stderr().flush()
        }
    }
}
