use super::{NII_GZ_SUFFIX, NII_SUFFIX};
use ndarray::ArrayD;
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 读取NIfTI体数据(`.nii`/`.nii.gz`)为f32数组。
/// 文件不存在或格式错误时直接panic终止整个运行。
pub fn load_volume(path: &Path) -> ArrayD<f32> {
    let obj = ReaderOptions::new().read_file(path).unwrap();
    obj.into_volume().into_ndarray::<f32>().unwrap()
}

/// 按文件名后缀（不区分大小写）判断是否为NIfTI体数据文件。
pub fn is_volume_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(NII_SUFFIX) || lower.ends_with(NII_GZ_SUFFIX)
}

/// 枚举目录下（不递归）的全部NIfTI文件。
/// 目录枚举顺序与平台相关，按文件名排序使输出可复现。
pub fn collect_volume_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.unwrap();
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = path.file_name().unwrap().to_str().unwrap();
        if is_volume_file(name) {
            files.push((name.to_string(), path.to_path_buf()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}
