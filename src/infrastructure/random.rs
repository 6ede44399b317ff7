//! 随机数来源 - 基础设施层
//!
//! 出题与反馈都只通过 [`Random`] 取随机数，测试中可以注入固定种子或固定序列

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机数来源
pub trait Random {
    /// 闭区间 [min, max] 上均匀分布的整数
    fn uniform_int(&mut self, min: i64, max: i64) -> i64;

    /// [0, len) 上均匀分布的下标
    fn uniform_index(&mut self, len: usize) -> usize {
        assert!(len > 0);
        self.uniform_int(0, len as i64 - 1) as usize
    }
}

/// 默认实现，基于 `StdRng`
pub struct DefaultRandom {
    rng: StdRng,
}

impl DefaultRandom {
    /// 使用系统熵初始化
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子初始化，相同种子产生相同序列
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.gen_range(min..=max)
    }
}
