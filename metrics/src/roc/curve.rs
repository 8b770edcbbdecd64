use json::JsonValue;

/// ROC空间中的一个工作点。每个提交文件对应单一阈值，即单个点。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
}

/// 按FPR升序稳定排序。FPR相同的点保持原有顺序。
pub fn sort_by_fpr(points: &mut [RocPoint]) {
    points.sort_by(|a, b| a.fpr.partial_cmp(&b.fpr).expect("nan fpr"));
}

/// 对按FPR升序排列的点列作梯形积分。点数少于2时积分退化，返回`None`。
pub fn trapezoid_auc(points: &[RocPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let mut area = 0.0;
    for w in points.windows(2) {
        area += (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0;
    }
    Some(area)
}

/// 将曲线、阈值与AUC汇总为JSON统计对象。
pub fn curve_json(points: &[RocPoint], auc: f64, threshold: f64) -> JsonValue {
    let curve: Vec<JsonValue> = points.iter().map(|p| json::array![p.fpr, p.tpr]).collect();
    json::object! {
        threshold: threshold,
        auc: auc,
        points: curve,
    }
}
