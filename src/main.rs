mod cli;

use anyhow::Result;
use chrono::Local;

use chronopick::config::Config;
use chronopick::log;
use chronopick::picker::{DatePicker, now_or_timestamp};
use chronopick::tui::Theme;

fn main() -> Result<()> {
    let args = cli::Args::parse(std::env::args().skip(1))?;
    if args.show_usage {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let config = Config::load().with_overrides(args.no_color.then_some(false), args.format.clone());

    // Initialize logging and panic hook
    if config.logging_enabled() {
        match log::init(&config.log_dir()) {
            Ok(log_path) => {
                log::log(&format!("Log file: {}", log_path.display()));
                log::install_panic_hook();
            }
            Err(e) => eprintln!("Warning: Failed to open log file: {}", e),
        }
    }

    let now = Local::now().fixed_offset();
    let mut picker = DatePicker::new(args.message)
        .with_now(now)
        .with_help_key(config.help_key())
        .with_theme(Theme::detect(config.color));

    if let Some(default) = &args.default {
        picker = picker.with_default(cli::parse_time(default, now)?);
    }
    if let Some(min) = &args.min {
        picker = picker.with_min(cli::parse_time(min, now)?);
    }
    if let Some(max) = &args.max {
        picker = picker.with_max(cli::parse_time(max, now)?);
    }
    if let Some(help) = args.help_text {
        picker = picker.with_help(help);
    }
    if args.scheduled {
        picker = picker.with_answer_formatter(now_or_timestamp);
    }

    match picker.ask() {
        Ok(value) => {
            println!("{}", cli::format_output(value, config.output_format.as_deref()));
            Ok(())
        }
        Err(e) if e.is_interrupted() => {
            log::log("interrupted by user");
            std::process::exit(130);
        }
        Err(e) => Err(e.into()),
    }
}
