use super::{plot, utils, volume};
use clap::Args;
use image::Rgb;
use metrics::prelude::{
    curve_json, run_jobs, sort_by_fpr, trapezoid_auc, ConfusionCounts, RocPoint,
};
use std::fs;
use std::mem;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct Roc {
    /// 掩膜NIfTI文件路径。
    #[arg(long = "mask-file", short = 'm')]
    mask_file: PathBuf,
    /// 金标准(Ground Truth)NIfTI文件路径，体素取值应为0/1。
    #[arg(long = "gt-file", short = 'g')]
    gt_file: PathBuf,
    /// 参赛者提交的预测结果目录。
    #[arg(long = "submission-folder", short = 'S')]
    submission_folder: PathBuf,
    /// ROC曲线图输出文件名。
    #[arg(long = "output-plot", default_value = "roc_curve.png")]
    output_plot: PathBuf,
    /// 统计结果(JSON)输出文件名。
    #[arg(long = "output-stats", default_value = "results.json")]
    output_stats: PathBuf,
    /// FPR过滤阈值，FPR超过该值的点被整体丢弃。
    #[arg(long, short = 't', default_value_t = 0.3)]
    threshold: f64,
    /// 曲线颜色（十六进制RGB，默认黄色）。
    #[arg(long, short, value_parser = utils::color_valid_rgb_hex)]
    color: Option<Rgb<u8>>,
}

impl Roc {
    pub fn run(&mut self) {
        assert!(self.submission_folder.is_dir());
        Program::new(
            mem::take(&mut self.mask_file),
            mem::take(&mut self.gt_file),
            mem::take(&mut self.submission_folder),
            mem::take(&mut self.output_plot),
            mem::take(&mut self.output_stats),
            self.threshold,
            self.color.unwrap_or_else(utils::rgb::yellow),
        )
        .run();
    }
}

struct Program {
    mask_file: PathBuf,
    gt_file: PathBuf,
    submission_folder: PathBuf,
    output_plot: PathBuf,
    output_stats: PathBuf,
    threshold: f64,
    color: Rgb<u8>,
}

impl Program {
    #[inline]
    pub fn new(
        mask_file: PathBuf,
        gt_file: PathBuf,
        submission_folder: PathBuf,
        output_plot: PathBuf,
        output_stats: PathBuf,
        threshold: f64,
        color: Rgb<u8>,
    ) -> Self {
        Self {
            mask_file,
            gt_file,
            submission_folder,
            output_plot,
            output_stats,
            threshold,
            color,
        }
    }

    pub fn run(&mut self) {
        println!("读取掩膜 `{}`...", self.mask_file.display());
        let mask = Arc::new(volume::load_volume(&self.mask_file));
        println!("读取金标准 `{}`...", self.gt_file.display());
        let gt = Arc::new(volume::load_volume(&self.gt_file));

        let submissions = volume::collect_volume_files(&self.submission_folder);
        println!("提交文件个数: {}", submissions.len());

        let jobs: Vec<_> = submissions
            .iter()
            .map(|(_, path)| {
                let gt = Arc::clone(&gt);
                let mask = Arc::clone(&mask);
                let path = path.clone();
                move || {
                    let pred = volume::load_volume(&path);
                    let c = ConfusionCounts::from_volumes(gt.view(), pred.view(), mask.view());
                    (c.tpr(), c.fpr())
                }
            })
            .collect();
        let rates = run_jobs(jobs);

        let mut points = Vec::new();
        for ((name, _), (tpr, fpr)) in submissions.iter().zip(rates) {
            if fpr > self.threshold {
                continue;
            }
            println!("File: {name} => TPR={tpr:.3}, FPR={fpr:.3}");
            points.push(RocPoint { fpr, tpr });
        }

        sort_by_fpr(&mut points);
        let auc = trapezoid_auc(&points).expect("too few roc points under threshold");
        self.summary(auc);

        let stats = curve_json(&points, auc, self.threshold);
        fs::write(self.output_stats.as_path(), stats.dump()).expect("write error");
        plot::render(&points, self.color, self.output_plot.as_path());
    }

    fn summary(&self, auc: f64) {
        println!("----------------------------------------------------------");
        println!("AUC: {auc:.6}");
        println!("----------------------------------------------------------");
    }
}
