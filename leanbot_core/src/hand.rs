use crate::card::{Card, Rank};
use std::fmt;

/// 手牌分类 (HandClass)
/// 只看点数，不做同花、顺子判断。变体按优先级从高到低排列。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandClass {
    PocketPair(Rank),      // 两张底牌点数相同
    BoardPair(Rank),       // 底牌与公共牌成对（只在翻牌后出现）
    PremiumUnpaired,       // 两张不同的高牌 (Q/K/A)
    Weak,                  // 其他
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HandClass::PocketPair(r) => write!(f, "口袋对({})", r),
            HandClass::BoardPair(r) => write!(f, "与公共牌成对({})", r),
            HandClass::PremiumUnpaired => write!(f, "高张不成对"),
            HandClass::Weak => write!(f, "弱牌"),
        }
    }
}

/// 对两张底牌和 0 到 5 张公共牌进行分类，第一个命中的规则生效。
///
/// 纯函数：没有随机性，也不依赖外部状态。
pub fn classify(hole: &[Card; 2], board: &[Card]) -> HandClass {
    let [first, second] = hole;

    if first.rank == second.rank {
        return HandClass::PocketPair(first.rank);
    }

    // 先看第一张底牌，两张都成对时报告第一张
    if let Some(card) = hole.iter().find(|h| board.iter().any(|b| b.rank == h.rank)) {
        return HandClass::BoardPair(card.rank);
    }

    if first.rank.is_high() && second.rank.is_high() {
        return HandClass::PremiumUnpaired;
    }

    HandClass::Weak
}
