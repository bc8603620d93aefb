#[cfg(feature = "random")]
pub mod randomized_queue;
