// ponte - Host program calling into Lua
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Host entry point.
//!
//! Exposes `funcao_c_soma_10` to a Lua script, runs the script, then calls
//! the script's `calculo(10, 20)` and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Run 03-funcao.lua from the working directory
//! ponte
//!
//! # Run another script, with debug logging
//! ponte -vv scripts/03-funcao.lua
//! ```

mod calculo;
mod natives;
mod printf;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{LevelFilter, debug};
use ponte_embed::{Engine, Error};

use crate::calculo::chamar_calculo;
use crate::printf::fixed;

/// Script loaded when none is given.
const DEFAULT_SCRIPT: &str = "03-funcao.lua";

#[derive(Parser)]
#[command(
    name = "ponte",
    about = "Calls a Lua function from Rust and a Rust function from Lua",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Lua script defining `calculo(x, y)`
    #[arg(env = "PONTE_SCRIPT", default_value = DEFAULT_SCRIPT)]
    script: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let engine = match Engine::with_natives(natives::registry()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = engine.eval_file(&cli.script) {
        fatal(engine, &e);
    }

    let valor = match chamar_calculo(&engine, 10.0, 20.0) {
        Ok(valor) => valor,
        Err(e) => fatal(engine, &e),
    };

    println!("Conta feita pela função em Lua: {}", fixed(valor));

    engine.close();
}

/// Report `err`, release the interpreter and exit with failure status.
fn fatal(engine: Engine, err: &Error) -> ! {
    debug!("fatal: {:?}", err);
    eprintln!("{}", err);
    engine.close();
    process::exit(1);
}

/// Logs go to stderr. `RUST_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
