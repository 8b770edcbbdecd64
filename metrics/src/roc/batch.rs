use std::sync::mpsc::channel;
use threadpool::ThreadPool;

/// 在线程池中执行一批相互独立的任务，并按提交顺序返回全部结果。
/// 单逻辑核机器退化为顺序执行。任何一个任务panic都会使整批失败。
pub fn run_jobs<T, F>(jobs: Vec<F>) -> Vec<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let logical_cpus = num_cpus::get();
    if logical_cpus == 1 {
        return jobs.into_iter().map(|job| job()).collect();
    }

    let job_len = jobs.len();
    let pool = ThreadPool::new(logical_cpus);
    let (tx, rx) = channel();
    for (seq, job) in jobs.into_iter().enumerate() {
        let tx = tx.clone();
        pool.execute(move || tx.send((seq, job())).expect("send error"));
    }
    drop(tx);

    let mut ret: Vec<(usize, T)> = rx.iter().collect();
    assert_eq!(ret.len(), job_len, "worker panicked");
    ret.sort_by_key(|v| v.0);
    ret.into_iter().map(|v| v.1).collect()
}
