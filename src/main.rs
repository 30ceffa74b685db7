use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use netspeed::{Error, Sampler, Selection, StatusRecord};

/// Periodic network bandwidth sampler for status bars.
///
/// Emits one JSON record per tick on stdout with the aggregate
/// receive/transmit rates of the selected interfaces.
#[derive(Debug, Parser)]
#[command(name = "netspeed", version)]
struct Cli {
    /// Polling interval in whole seconds
    #[arg(
        short = 't',
        value_name = "SECS",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    interval: i64,

    /// Restrict sampling to these interfaces (default: auto-detect
    /// eth*/wlan*/enp*/wlp*)
    #[arg(value_name = "INTERFACE")]
    interfaces: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders usage/help itself; help and version go to
            // stdout with success, everything else is a usage error.
            let is_usage_error = err.use_stderr();
            let _ = err.print();
            return if is_usage_error {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> netspeed::Result<()> {
    let mut out = io::stdout().lock();

    if cli.interval < 1 {
        emit_fatal(
            &mut out,
            &cli.interval.to_string(),
            "Invalid polling interval",
        );
        return Err(Error::InvalidInterval {
            value: cli.interval,
        });
    }

    let selection = Selection::from_args(cli.interfaces.clone());
    if let Err(err) = selection.validate() {
        if let Error::InterfaceNotFound { name } = &err {
            emit_fatal(&mut out, name, "Interface does not exist");
        }
        return Err(err);
    }

    let sampler = Sampler::new(cli.interval as u64, selection);
    sampler.run(&mut out)
}

fn emit_fatal<W: Write>(out: &mut W, label: &str, detail: &str) {
    // Configuration failures still produce a well-formed record so the
    // widget can display them; an emit failure here has nowhere to go.
    let _ = StatusRecord::error(label, detail).emit(out);
}
