use clap::Parser;
use evaluation::Cli;

fn main() {
    let mut cmd: Cli = Cli::parse();
    cmd.run_program();
}
