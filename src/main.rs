//! LS-8 emulator.
//!
//! Loads a program file of binary literals and runs it until `HLT`.
//!
//! # Usage
//! ```text
//! ls8 <program.ls8> [OPTIONS]
//! ```
//!
//! # Options
//! - `-t, --trace`: print a trace line before every instruction
//! - `-s, --strict`: stop on unsupported opcodes instead of skipping them
//! - `-l, --log <level>`: log level (`debug`, `info`, `warn`, `error`);
//!   falls back to the `LS8_LOG` environment variable, then `info`

use ls8::utils::log::{self, Level};
use ls8::virtual_machine::config::{UnsupportedOpcodePolicy, VmConfig};
use ls8::virtual_machine::loader;
use ls8::virtual_machine::output::StdOutput;
use ls8::virtual_machine::vm::VM;
use ls8::{debug, error, info};
use std::env;
use std::path::Path;
use std::process;

const LOG_ENV: &str = "LS8_LOG";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Run {
        path: String,
        config: VmConfig,
        log_level: Option<String>,
    },
}

/// Parses arguments after the program name.
///
/// `log_level` starts from the environment and is overridden by `--log`.
fn parse_args(args: &[String], env_log_level: Option<String>) -> Result<Command, String> {
    let Some(first) = args.first() else {
        return Err("missing program file".to_string());
    };
    if first == "--help" || first == "-h" {
        return Ok(Command::Help);
    }

    let path = first.clone();
    let mut config = VmConfig::default();
    let mut log_level = env_log_level;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--trace" | "-t" => {
                config = config.with_trace(true);
                i += 1;
            }
            "--strict" | "-s" => {
                config = config.with_unsupported_policy(UnsupportedOpcodePolicy::Halt);
                i += 1;
            }
            k @ ("--log" | "-l") => {
                i += 1;
                if i >= args.len() {
                    return Err(format!("{k} requires an argument"));
                }
                log_level = Some(args[i].clone());
                i += 1;
            }
            other => return Err(format!("Unexpected argument: {other}")),
        }
    }

    Ok(Command::Run {
        path,
        config,
        log_level,
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("ls8");

    let command = parse_args(args.get(1..).unwrap_or_default(), env::var(LOG_ENV).ok());
    let (program_path, config, log_level) = match command {
        Ok(Command::Help) => {
            print_usage(program_name);
            process::exit(0);
        }
        Ok(Command::Run {
            path,
            config,
            log_level,
        }) => (path, config, log_level),
        Err(e) => {
            error!("{e}\n");
            print_usage(program_name);
            process::exit(1);
        }
    };

    if let Some(level) = log_level {
        match level.parse::<Level>() {
            Ok(level) => log::set_max_level(level),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
    }

    let source = loader::read_source(Path::new(&program_path)).unwrap_or_else(|e| {
        error!("Failed to load {}: {}", program_path, e);
        process::exit(1);
    });
    let program = loader::parse_program(&source).unwrap_or_else(|e| {
        error!("{}", loader::render_diagnostic(&program_path, &source, &e));
        process::exit(1);
    });

    let mut vm = VM::new(config);
    if let Err(e) = vm.load(&program) {
        error!("Failed to load {}: {}", program_path, e);
        process::exit(1);
    }
    debug!("loaded {} bytes from {}", program.len(), program_path);

    match vm.run(&mut StdOutput::new()) {
        Ok(steps) => debug!("{} finished in {} steps", program_path, steps),
        Err(e) => {
            error!("Execution fault at pc 0x{:02X}: {}", vm.pc(), e);
            process::exit(1);
        }
    }
}

const USAGE: &str = "\
LS-8 Emulator

USAGE:
    {program} <program.ls8> [OPTIONS]

ARGS:
    <program.ls8>    Program file, one binary literal per line

OPTIONS:
    -t, --trace          Print machine state before every instruction
    -s, --strict         Stop on unsupported opcodes instead of skipping them
    -l, --log <level>    Log level: debug, info, warn, error (env: LS8_LOG)
    -h, --help           Print this help message

EXAMPLES:
    {program} programs/mult.ls8
    {program} programs/print8.ls8 --trace --log debug
";

fn print_usage(program: &str) {
    info!("{}", USAGE.replace("{program}", program));
}
