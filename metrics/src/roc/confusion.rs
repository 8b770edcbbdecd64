use ndarray::{ArrayViewD, Zip};

/// 二值分割结果在掩膜区域内的2x2混淆矩阵计数。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConfusionCounts {
    pub tp: u64,
    pub tn: u64,
    pub fp: u64,
    pub fn_: u64,
}

impl ConfusionCounts {
    /// 在`mask == 1`的体素范围内逐体素比较`pred`与`gt`并计数。
    /// 三个数组的形状必须一致，不一致时panic。
    pub fn from_volumes(
        gt: ArrayViewD<f32>,
        pred: ArrayViewD<f32>,
        mask: ArrayViewD<f32>,
    ) -> Self {
        let mut c = ConfusionCounts::default();
        Zip::from(gt).and(pred).and(mask).for_each(|&g, &p, &m| {
            if m != 1.0 {
                return;
            }
            // 非0/1的体素值不落入任何一类。
            if p == 1.0 && g == 1.0 {
                c.tp += 1;
            } else if p == 0.0 && g == 0.0 {
                c.tn += 1;
            } else if p == 1.0 && g == 0.0 {
                c.fp += 1;
            } else if p == 0.0 && g == 1.0 {
                c.fn_ += 1;
            }
        });
        c
    }

    /// 真阳性率。正样本个数为0时定义为0。
    #[inline]
    pub fn tpr(&self) -> f64 {
        match self.tp + self.fn_ {
            0 => 0.0,
            positives => self.tp as f64 / positives as f64,
        }
    }

    /// 假阳性率。负样本个数为0时定义为0。
    #[inline]
    pub fn fpr(&self) -> f64 {
        match self.fp + self.tn {
            0 => 0.0,
            negatives => self.fp as f64 / negatives as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfusionCounts;
    use ndarray::ArrayD;

    fn volume(shape: &[usize], values: &[f32]) -> ArrayD<f32> {
        ArrayD::from_shape_vec(shape.to_vec(), values.to_vec()).unwrap()
    }

    fn counts_of(gt: &[f32], pred: &[f32], mask: &[f32]) -> ConfusionCounts {
        let shape = [2, 2, 1];
        let gt = volume(&shape, gt);
        let pred = volume(&shape, pred);
        let mask = volume(&shape, mask);
        ConfusionCounts::from_volumes(gt.view(), pred.view(), mask.view())
    }

    #[test]
    fn test_perfect_prediction() {
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[1.0, 0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(
            c,
            ConfusionCounts {
                tp: 2,
                tn: 2,
                fp: 0,
                fn_: 0
            }
        );
        assert_eq!(c.tpr(), 1.0);
        assert_eq!(c.fpr(), 0.0);
    }

    #[test]
    fn test_all_ones_prediction() {
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(c.tpr(), 1.0);
        assert_eq!(c.fpr(), 1.0);
    }

    #[test]
    fn test_all_zero_prediction() {
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(c.tpr(), 0.0);
        assert_eq!(c.fpr(), 0.0);
        assert_eq!(c.fn_, 2);
        assert_eq!(c.tn, 2);
    }

    #[test]
    fn test_empty_mask() {
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[1.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.0, 0.0],
        );
        assert_eq!(c, ConfusionCounts::default());
        assert_eq!(c.tpr(), 0.0);
        assert_eq!(c.fpr(), 0.0);
    }

    #[test]
    fn test_mask_restricts_counting() {
        // 只有前两个体素被选中。
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 0.0],
        );
        assert_eq!(c.tp + c.tn + c.fp + c.fn_, 2);
        assert_eq!(c.tp, 1);
        assert_eq!(c.fp, 1);
    }

    #[test]
    fn test_non_binary_voxels_uncounted() {
        let c = counts_of(
            &[1.0, 0.0, 0.0, 1.0],
            &[0.7, 0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(c.tp + c.tn + c.fp + c.fn_, 3);
    }

    #[test]
    fn test_rates_within_unit_interval() {
        let c = counts_of(
            &[1.0, 1.0, 0.0, 0.0],
            &[1.0, 0.0, 1.0, 0.0],
            &[1.0, 1.0, 1.0, 1.0],
        );
        assert!((0.0..=1.0).contains(&c.tpr()));
        assert!((0.0..=1.0).contains(&c.fpr()));
        assert_eq!(c.tpr(), 0.5);
        assert_eq!(c.fpr(), 0.5);
    }

    #[test]
    #[should_panic]
    fn test_shape_mismatch() {
        let gt = volume(&[2, 2, 1], &[1.0, 0.0, 0.0, 1.0]);
        let pred = volume(&[4, 1, 1], &[1.0, 0.0, 0.0, 1.0]);
        let mask = volume(&[2, 2, 1], &[1.0, 1.0, 1.0, 1.0]);
        ConfusionCounts::from_volumes(gt.view(), pred.view(), mask.view());
    }
}
