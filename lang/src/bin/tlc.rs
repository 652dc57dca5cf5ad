use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use toylang::toolchain;
use toylang::toolchain::diagnostics::{self, DiagnosticConsumer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    tlc - the toy language checker

    USAGE:
        tlc [--phase PHASE] [--quiet] [--verbose] FILENAME

    OPTIONS:
        --phase PHASE       Which phase to take the source through. PHASE is one of 'lex', which
                            prints the kind of every token, or 'parse' (the default), which
                            checks the program against the grammar.
        --quiet             If present, located diagnostics are not written to stderr.
        --verbose           If present, debug logging is written to stderr. RUST_LOG overrides.

    ARGS:
        FILENAME            The path to the source file to check, or supply '-' to take input
                            from stdin.
";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CheckPhase {
    Lex,
    Parse,
}

#[derive(Debug, Eq, PartialEq)]
struct TlcArgs {
    phase: CheckPhase,
    quiet: bool,
    verbose: bool,
    source_file: std::path::PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let mut pargs = pico_args::Arguments::from_env();
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(ExitCode::SUCCESS);
    }

    let args = match parse_args(pargs) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(args.verbose);

    let source = if args.source_file.as_os_str() == "-" {
        toolchain::source::SourceBuffer::new_from_reader(std::io::stdin().lock(), "<stdin>")
            .context("Error reading standard input")?
    } else {
        toolchain::source::SourceBuffer::new_from_file(&args.source_file).with_context(|| {
            format!("Error opening source file {}", args.source_file.display())
        })?
    };

    let mut diags: Box<dyn DiagnosticConsumer> = if args.quiet {
        Box::new(diagnostics::diagnostic_emitter::NullDiagnosticConsumer {})
    } else {
        Box::new(diagnostics::diagnostic_emitter::console_diagnostic_consumer())
    };

    let mut out = std::io::stdout().lock();
    let accepted =
        check(&source, args.phase, &mut out, diags.as_mut()).context("Error writing output")?;
    diags.flush();
    out.flush().context("Error writing output")?;

    Ok(if accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// Runs the requested phase, writing results to `out`. Returns false on any lex or syntax error.
fn check(
    source: &toolchain::source::SourceBuffer,
    phase: CheckPhase,
    out: &mut dyn Write,
    diags: &mut dyn DiagnosticConsumer,
) -> std::io::Result<bool> {
    let tokens = match toolchain::lexer::TokenizedBuffer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => {
            writeln!(out, "{}", e)?;
            diagnostics::report_lex_error(diags, source.file_name(), &e);
            return Ok(false);
        }
    };

    if phase == CheckPhase::Lex {
        tokens.write_tokens(out)?;
        return Ok(true);
    }

    match toolchain::parser::recognize_program(tokens.tokens()) {
        Ok(end) => {
            diagnostics::report_trailing_tokens(diags, &tokens, end);
            writeln!(out, "Parse successful")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{}", e)?;
            diagnostics::report_syntax_error(diags, &tokens, &e);
            Ok(false)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn parse_args(mut pargs: pico_args::Arguments) -> Result<TlcArgs, pico_args::Error> {
    let args = TlcArgs {
        phase: pargs.opt_value_from_fn("--phase", parse_phase)?.unwrap_or(CheckPhase::Parse),
        quiet: pargs.contains("--quiet"),
        verbose: pargs.contains("--verbose"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unused arguments left: {:?}", remaining),
        });
    }
    Ok(args)
}

fn parse_phase(s: &str) -> Result<CheckPhase, &'static str> {
    match s {
        "lex" => Ok(CheckPhase::Lex),
        "parse" => Ok(CheckPhase::Parse),
        _ => Err("unrecognized phase, expected 'lex' or 'parse'"),
    }
}
