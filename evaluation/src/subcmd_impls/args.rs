use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "evaluation")]
#[command(about = "二值分割提交结果的ROC/AUC评估工具集。")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 子命令。
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run_program(&mut self) {
        match self.command {
            Commands::Roc(ref mut v) => v.run(),
            Commands::Verify(ref mut v) => v.run(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 在掩膜区域内逐个评估提交的分割结果，汇总ROC曲线并计算AUC。
    Roc(crate::subcmd_impls::roc::Roc),
    /// 自动检验掩膜、金标准与提交文件的形状及取值性质。
    Verify(crate::subcmd_impls::verify::Verify),
}
