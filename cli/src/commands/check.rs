use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use colored::*;
use indicatif::ProgressBar;
use pulse_common::config::ProbeConfig;
use pulse_common::network::status::{Status, StatusReport};
use pulse_core::prober::Prober;
use tracing::{Instrument, info_span};

use crate::commands::CheckArgs;
use crate::terminal::{colors, print, spinner};

pub async fn check(args: CheckArgs, q_level: u8) -> anyhow::Result<()> {
    let config: ProbeConfig = args.to_config()?;
    let total: usize = config.targets().len();

    let progress: Option<ProgressBar> =
        (q_level < 2 && !args.json).then(|| spinner::start_probe_spinner(total));

    let done: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let start_time: Instant = Instant::now();

    let report: StatusReport = Prober::new(config.clone())
        .on_result(move |name, status| {
            let done = done.fetch_add(1, Ordering::Relaxed) + 1;
            spinner::report_probe_progress(done, total, name, status);
        })
        .run()
        .instrument(info_span!("check", targets = total))
        .await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        check_ends(&config, &report, start_time.elapsed(), q_level);
    }

    if args.strict && !report.all_up() {
        anyhow::bail!("{} of {} targets are down", report.down_count(), report.len());
    }
    Ok(())
}

fn check_ends(config: &ProbeConfig, report: &StatusReport, total_time: Duration, q_level: u8) {
    print::header("service status", q_level);
    print_statuses(config, report);
    print_summary(report, total_time, q_level);
}

/// One line per target, in the order they were given.
fn print_statuses(config: &ProbeConfig, report: &StatusReport) {
    print::set_key_width(config.targets().iter().map(|t| t.name.as_str()));

    for target in config.targets() {
        let status: Status = report.get(&target.name).unwrap_or(Status::Down);
        let value: String = format!(
            "{} {}",
            status_colored(status),
            format!("({})", target.address()).color(colors::ADDRESS)
        );
        print::aligned_line(&target.name, value);
    }
}

fn print_summary(report: &StatusReport, total_time: Duration, q_level: u8) {
    let up: ColoredString = format!("{} up", report.up_count()).bold().color(colors::STATUS_UP);
    let down: ColoredString = format!("{} down", report.down_count()).bold().color(colors::STATUS_DOWN);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Check Complete: {up}, {down} in {total_time}");

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        1 => print::print_status(&output),
        _ => {}
    }
}

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Up => status.as_str().color(colors::STATUS_UP).bold(),
        Status::Down => status.as_str().color(colors::STATUS_DOWN).bold(),
    }
}
