//! src/bin/lantern.rs
//! Example entry point exercising every backend behind the logger contract.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use console::ConsoleLogger;
use logging::{
    debug_log, error_log, fatal_log, info_log, set_global_level, trace_log, warn_log,
    BuildError, Level, Logger,
};
use structured::StructuredLogger;

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("lantern")
        .about("Demo of the lantern leveled-logging facade")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("debug")
                .help("Initial global log level by name (e.g. error, info, trace)."),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .value_name("BACKEND")
                .default_value("plain")
                .value_parser(["plain", "colour", "json", "pretty"])
                .help("Concrete logger backend to construct."),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Redirect log output to FILE (created if absent, appended if present)."),
        )
        .arg(
            Arg::new("fail")
                .long("fail")
                .action(ArgAction::SetTrue)
                .help("Finish with a FATAL message, terminating with a non-zero status."),
        )
}

/// Explicit factory selecting the concrete logger for a backend name.
///
/// `clap` restricts the name to the four known backends before this runs;
/// anything outside the structured pair gets the console backend.
fn build_logger(backend: &str, output: Option<&PathBuf>) -> Result<Box<dyn Logger>, BuildError> {
    match backend {
        "json" | "pretty" => {
            let mut builder = StructuredLogger::builder()
                .namespace("lantern.example")
                .pretty(backend == "pretty");
            if let Some(path) = output {
                builder = builder.output_file(path);
            }
            Ok(Box::new(builder.build()?))
        }
        _ => {
            let mut builder = ConsoleLogger::builder()
                .namespace("lantern.example")
                .colour(backend == "colour");
            if let Some(path) = output {
                builder = builder.output_file(path);
            }
            Ok(Box::new(builder.build()?))
        }
    }
}

fn main() -> ExitCode {
    let matches = clap_command().get_matches();

    // Unrecognized level names are rejected outright rather than silently
    // degrading; configuration errors should be loud.
    let level_name = matches
        .get_one::<String>("log-level")
        .map_or("debug", String::as_str);
    let level = Level::from_name(level_name);
    if level.is_unset() {
        eprintln!("lantern: unrecognized log level '{level_name}'");
        return ExitCode::from(2);
    }
    set_global_level(level);

    let backend = matches
        .get_one::<String>("backend")
        .map_or("plain", String::as_str);
    let log = match build_logger(backend, matches.get_one::<PathBuf>("output")) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("lantern: {err}");
            return ExitCode::from(2);
        }
    };

    info_log!(log, "starting application....");
    warn_log!(log, "do not do that!");
    debug_log!(log, "sent {} value to server {}", 1, "example.com");
    error_log!(log, "error: {}", "bang");
    trace_log!(log, "most verbose detail");

    let child = log.sub_logger("lantern.example.worker");
    info_log!(child, "worker ready");

    if matches.get_flag("fail") {
        fatal_log!(log, "the application went boom");
        // Real backends never return from fatal; EmptyLogger would.
    }

    ExitCode::SUCCESS
}
