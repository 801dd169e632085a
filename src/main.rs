mod args;
mod dbg;
mod logger;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use quill::error::{self, QuillError};
use quill::{Colorizer, Theme, Writer};

use crate::args::Args;
use crate::dbg::dbg_info;
use crate::logger::setup_logging;

fn main() -> ExitCode {
    let args: Args = Args::parse();
    setup_logging(args.verbosity_level);
    log::debug!("Config: {:?}", args);

    if args.print_dbg {
        println!("{}", dbg_info());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => error::exit(err),
    }
}

fn run(args: &Args) -> Result<(), QuillError> {
    let mut colorizer = Colorizer::new(args.use_colors());

    if let Some(path) = args.theme() {
        let content: String = fs::read_to_string(path)?;
        let theme: Theme = content.parse()?;
        theme.apply(&mut colorizer)?;
    }

    let mut writer = Writer::with_target(args.output(), colorizer)?;
    let text: String = args.text();

    if args.raw() {
        writer.raw(text, false)?;
    } else {
        writer.style(args.style())?.write(&text, args.newline())?;
    }

    Ok(())
}
