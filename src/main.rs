use clap::{builder::FalseyValueParser, ArgAction, Parser, Subcommand};
use gofi_lang::{
    config::{self, RunConfig},
    error::Error,
    pipeline::{compile, load, Compiled},
    runtime::Outcome,
    tools::{
        diagnostics::{emit_error, report_io_error},
        listing::token_listing,
    },
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Interpreter for a tiny whitespace-delimited language with DEF, IF/THEN/FI
/// blocks and GOTO labels.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a program.
    Run {
        file: PathBuf,
        /// Print the token listing before running.
        #[arg(long, env = config::PRINT_TOKENS_VAR, value_parser = FalseyValueParser::new())]
        tokens: bool,
        /// Print every declared variable after the run.
        #[arg(long, env = config::DUMP_VARS_VAR, value_parser = FalseyValueParser::new())]
        vars: bool,
        /// Do not print the elapsed interpreting time.
        #[arg(long, env = config::NO_TIMING_VAR, value_parser = FalseyValueParser::new())]
        no_timing: bool,
    },
    /// Print the token listing of a program.
    Tokens { file: PathBuf },
    /// Tokenize and index labels without running.
    Check { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ok = match cli.command {
        Command::Run {
            file,
            tokens,
            vars,
            no_timing,
        } => run(&file, RunConfig::from_flags(tokens, vars, no_timing)),
        Command::Tokens { file } => with_compiled(&file, |compiled| {
            print!("{}", token_listing(&compiled.stream));
            Ok(())
        }),
        Command::Check { file } => with_compiled(&file, |compiled| {
            println!(
                "{} tokens, {} identifiers, {} labels, {} variable slots",
                compiled.stream.len(),
                compiled.stream.identifiers().len(),
                compiled.preprocessed.labels.len(),
                compiled.preprocessed.declared_vars
            );
            Ok(())
        }),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().filter_or(config::LOG_VAR, config::log_level(verbosity));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn run(file: &Path, config: RunConfig) -> bool {
    with_compiled(file, |compiled| {
        if config.print_tokens {
            print!("{}", token_listing(&compiled.stream));
        }
        let outcome = compiled.run()?;
        if config.dump_variables {
            print_variables(&outcome);
        }
        if config.report_timing {
            let elapsed = outcome.elapsed;
            println!(
                "Interpreting took {}s {}ms {}us",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                elapsed.subsec_micros() % 1000
            );
        }
        Ok(())
    })
}

fn print_variables(outcome: &Outcome) {
    for (name, value) in &outcome.variables {
        println!("{name} = {value}");
    }
}

/// Loads and compiles `file`, hands it to `action`, and reports any error.
fn with_compiled(file: &Path, action: impl FnOnce(&Compiled) -> Result<(), Error>) -> bool {
    let source = match load(file) {
        Ok(source) => source,
        Err(Error::Io { path, source }) => {
            report_io_error(&path, &source);
            return false;
        }
        Err(err) => {
            eprintln!("ERR: {err}");
            return false;
        }
    };
    match compile(&source).and_then(|compiled| action(&compiled)) {
        Ok(()) => true,
        Err(err) => {
            emit_error(&source, &err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::try_parse_from([
            "gofi-lang",
            "-vv",
            "run",
            "prog.gofi",
            "--vars",
            "--no-timing",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run {
                file,
                vars,
                no_timing,
                ..
            } => {
                assert_eq!(file, PathBuf::from("prog.gofi"));
                assert!(vars);
                assert!(no_timing);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
