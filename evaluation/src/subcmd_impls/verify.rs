use super::volume;
use clap::Args;
use ndarray::ArrayD;
use std::mem;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Verify {
    /// 掩膜NIfTI文件路径。
    #[arg(long = "mask-file", short = 'm')]
    mask_file: PathBuf,
    /// 金标准(Ground Truth)NIfTI文件路径。
    #[arg(long = "gt-file", short = 'g')]
    gt_file: PathBuf,
    /// 参赛者提交的预测结果目录。
    #[arg(long = "submission-folder", short = 'S')]
    submission_folder: PathBuf,
}

impl Verify {
    pub fn run(&mut self) {
        assert!(self.submission_folder.is_dir());
        Program::new(
            mem::take(&mut self.mask_file),
            mem::take(&mut self.gt_file),
            mem::take(&mut self.submission_folder),
        )
        .run();
    }
}

struct Program {
    mask_file: PathBuf,
    gt_file: PathBuf,
    submission_folder: PathBuf,
}

impl Program {
    #[inline]
    pub fn new(mask_file: PathBuf, gt_file: PathBuf, submission_folder: PathBuf) -> Self {
        Self {
            mask_file,
            gt_file,
            submission_folder,
        }
    }

    // 评估过程本身不校验这些性质，这里逐项检验并报告，不中断遍历。
    pub fn run(&mut self) {
        println!("正在检验掩膜与金标准...");
        let mask = volume::load_volume(&self.mask_file);
        let gt = volume::load_volume(&self.gt_file);

        let mut ok = true;
        ok &= Self::check_binary(&mask, "mask");
        ok &= Self::check_binary(&gt, "gt");
        ok &= Self::check_same_shape(&gt, &mask, "gt");
        ok &= Self::check_mask_selects(&mask);

        for (name, path) in volume::collect_volume_files(&self.submission_folder) {
            println!("正在检验文件`{name}`...");
            let pred = volume::load_volume(&path);
            ok &= Self::check_binary(&pred, &name);
            ok &= Self::check_same_shape(&pred, &mask, &name);
        }

        if ok {
            println!("全部性质检验通过。");
        } else {
            eprintln!("存在未通过的检验项。");
        }
    }

    #[inline]
    fn print_failed(fn_name: &str, detail: &str) {
        eprintln!("`{fn_name}` failed: {detail}.");
    }

    fn check_binary(v: &ArrayD<f32>, name: &str) -> bool {
        let outliers = v.iter().filter(|&&x| x != 0.0 && x != 1.0).count();
        if outliers != 0 {
            Self::print_failed(
                "check_binary",
                &format!("in `{name}`, {outliers} voxels outside {{0, 1}}"),
            );
            return false;
        }
        true
    }

    fn check_same_shape(v: &ArrayD<f32>, mask: &ArrayD<f32>, name: &str) -> bool {
        if v.shape() != mask.shape() {
            Self::print_failed(
                "check_same_shape",
                &format!(
                    "in `{name}`, shape {:?} differs from mask shape {:?}",
                    v.shape(),
                    mask.shape()
                ),
            );
            return false;
        }
        true
    }

    fn check_mask_selects(mask: &ArrayD<f32>) -> bool {
        if !mask.iter().any(|&m| m == 1.0) {
            Self::print_failed("check_mask_selects", "mask selects no voxel");
            return false;
        }
        true
    }
}
