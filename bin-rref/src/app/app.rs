use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{check, reduce};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Row reduce a matrix to RREF.
    Reduce(reduce::Args),
    /// Check whether a matrix is in RREF.
    Check(check::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Reduce(args) => args.log,
            Cmd::Check(args)  => args.log,
        };
        gauss::util::log::level_filter(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = gauss::util::log::init_simple_logger(l) { 
            eprintln!("logger unavailable: {e}");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Reduce(args) => reduce::dispatch(args),
                Cmd::Check(args)  => check::dispatch(args),
            }
        )
    }
}
