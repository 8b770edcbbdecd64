pub mod subcmd_impls;

pub use subcmd_impls::args::Cli;
