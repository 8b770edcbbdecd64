use super::utils::rgb;
use image::{Rgb, RgbImage};
use metrics::prelude::RocPoint;
use std::path::Path;

const PLOT_WIDTH: u32 = 512;
const MARGIN: u32 = 32;
// 单位正方形内可落点的边长。
const INNER: u32 = PLOT_WIDTH - 2 * MARGIN - 1;

/// 将按FPR升序排列的ROC点列渲染为PNG折线图。
/// 黑底；白色边框为单位正方形；灰色对角线为随机分类器参考线。
pub fn render<P: AsRef<Path>>(points: &[RocPoint], color: Rgb<u8>, path: P) {
    let mut png = RgbImage::from_pixel(PLOT_WIDTH, PLOT_WIDTH, rgb::black());
    draw_frame(&mut png);
    draw_diagonal(&mut png);
    for w in points.windows(2) {
        draw_segment(&mut png, to_pixel(w[0]), to_pixel(w[1]), color);
    }
    for p in points {
        draw_mark(&mut png, to_pixel(*p), color);
    }
    png.save(path).unwrap();
}

// (fpr, tpr) -> 像素坐标，TPR轴向上为正。
fn to_pixel(p: RocPoint) -> (u32, u32) {
    let x = MARGIN + (p.fpr * INNER as f64).round() as u32;
    let y = MARGIN + INNER - (p.tpr * INNER as f64).round() as u32;
    (x, y)
}

fn draw_frame(png: &mut RgbImage) {
    let lo = MARGIN;
    let hi = MARGIN + INNER;
    for t in lo..=hi {
        *png.get_pixel_mut(t, lo) = rgb::white();
        *png.get_pixel_mut(t, hi) = rgb::white();
        *png.get_pixel_mut(lo, t) = rgb::white();
        *png.get_pixel_mut(hi, t) = rgb::white();
    }
}

fn draw_diagonal(png: &mut RgbImage) {
    for t in 0..=INNER {
        *png.get_pixel_mut(MARGIN + t, MARGIN + INNER - t) = rgb::gray();
    }
}

fn draw_segment(png: &mut RgbImage, from: (u32, u32), to: (u32, u32), color: Rgb<u8>) {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (x1, y1) = (to.0 as f64, to.1 as f64);
    let steps = (x1 - x0).abs().max((y1 - y0).abs()) as u32;
    if steps == 0 {
        *png.get_pixel_mut(from.0, from.1) = color;
        return;
    }
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = (x0 + (x1 - x0) * t).round() as u32;
        let y = (y0 + (y1 - y0) * t).round() as u32;
        *png.get_pixel_mut(x, y) = color;
    }
}

// 3x3方块标记，边缘处截断。
fn draw_mark(png: &mut RgbImage, center: (u32, u32), color: Rgb<u8>) {
    for x in center.0.saturating_sub(1)..=(center.0 + 1).min(PLOT_WIDTH - 1) {
        for y in center.1.saturating_sub(1)..=(center.1 + 1).min(PLOT_WIDTH - 1) {
            *png.get_pixel_mut(x, y) = color;
        }
    }
}
