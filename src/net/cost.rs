//! 链路开销类型
//!
//! 定义链路开销及其饱和相加运算。哨兵值 `INFINITE` 表示“无已知路由”。

use std::fmt;

/// 链路/路径开销。
///
/// 全序比较由派生的 `Ord` 提供；相加使用饱和算术，
/// `INFINITE` 与任何值组合仍为 `INFINITE`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    /// 不可达哨兵值
    pub const INFINITE: Cost = Cost(u64::MAX);

    /// 构造不可达哨兵值
    pub fn infinite() -> Cost {
        Cost::INFINITE
    }

    /// 构造有限开销
    pub fn of(value: u64) -> Cost {
        Cost(value)
    }

    /// 两个开销相加（饱和，无论叠加多少个 `INFINITE` 都不会溢出）
    pub fn combine(self, other: Cost) -> Cost {
        Cost(self.0.saturating_add(other.0))
    }

    /// 是否为有限开销
    pub fn is_finite(self) -> bool {
        self != Cost::INFINITE
    }

    /// 有限开销的数值
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::INFINITE
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "inf")
        }
    }
}
