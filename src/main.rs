#[cfg(target_os = "linux")]
use std::os::linux::fs::MetadataExt;

use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use thiserror::Error;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use clap::Parser;
use ringtape::{
    byte_utils::as_bstr, execute, parse_source, tape::RingTape, tape::Tape, ExecuteCallbackData,
    ExecuteCallbackResult, ExecutionError, Head,
};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("could not read {}: {source}", path.display())]
    SourceError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("{0}")]
    ExecutionError(#[from] ExecutionError),
}

/// Takes exactly one source file. There are no `--help`/`--version`
/// flags, any other invocation is a usage error.
#[derive(Parser, Debug)]
#[command(
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Input Brainfuck source file
    input_file: PathBuf,

    /// Log every executed instruction (to stderr)
    #[arg(long, default_value_t = false)]
    trace: bool,
}

/// Set up logging to stderr. `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_source(path: &Path) -> Result<Vec<u8>, io::Error> {
    let mut file = std::fs::File::open(path)?;

    #[cfg(target_os = "linux")]
    let mut buf = Vec::with_capacity(file.metadata()?.st_size() as usize);
    #[cfg(not(target_os = "linux"))]
    let mut buf = Vec::new();

    file.read_to_end(&mut buf)?;
    Ok(buf)
}

fn run(args: &Args) -> Result<(), ProgramError> {
    let buf = load_source(&args.input_file).map_err(|source| ProgramError::SourceError {
        path: args.input_file.clone(),
        source,
    })?;
    debug!(path = %args.input_file.display(), bytes = buf.len(), "loaded source");

    let code = parse_source(buf.as_slice());
    debug!(instructions = code.len(), "parsed program");

    let trace_enabled = args.trace;
    let mut tape = RingTape::new();
    let mut head = Head::default();
    let mut stdout = io::stdout().lock();
    let result = execute(
        &code,
        &mut tape,
        &mut head,
        &mut io::stdin().lock(),
        &mut stdout,
        &mut |data, tape, head| {
            if trace_enabled {
                let cell = tape.get(*head);
                match data {
                    ExecuteCallbackData::Instruction { pc, instr } => {
                        trace!(pc, %head, %cell, %instr, "exec");
                    }
                    ExecuteCallbackData::Jump { from, to } => {
                        trace!(from, to, %cell, "jump");
                    }
                }
            }
            ExecuteCallbackResult::Continue
        },
    );
    // Whatever was written before a fault still goes out.
    let flushed = stdout.flush();
    finish(result, flushed)?;

    debug!(head = %head, cell = %tape.get(head), "program finished");
    if trace_enabled {
        let window: Vec<u8> = tape.slice(0.into(), 16).iter().map(|c| u8::from(*c)).collect();
        trace!(tape = %as_bstr(&window), "first cells");
    }
    Ok(())
}

/// Combine the run and the final flush, a fault in the run wins.
fn finish(
    result: Result<(), ExecutionError>,
    flushed: io::Result<()>,
) -> Result<(), ProgramError> {
    result?;
    flushed?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.trace);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "fatal fault");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
