use crate::card::Card;
use crate::error::DecisionError;
use crate::hand::{classify, HandClass};
use crate::state::{PlayerView, TableState};

// --- 下注决策 ---

/// 一次下注决策的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub hole: [Card; 2],
    pub class: HandClass,
    pub wager: u32,
}

/// "便宜" 的跟注上限：筹码的 1/50 向下取整 (约 2%)，至少为 1。
pub fn cheap_call_limit(stack: u32) -> u32 {
    (stack / 50).max(1)
}

/// 处理一次下注请求
///
/// 按 `in_action` 找到行动玩家，取出两张底牌并分类，然后计算下注额。
/// 找不到行动玩家或底牌不是两张时返回错误。
pub fn bet_request(state: &TableState) -> Result<Decision, DecisionError> {
    let me = state
        .acting_player()
        .ok_or(DecisionError::ActingPlayerMissing { in_action: state.in_action })?;

    let hole: [Card; 2] = me
        .hole_cards
        .as_slice()
        .try_into()
        .map_err(|_| DecisionError::HoleCards { player: me.id, found: me.hole_cards.len() })?;

    let class = classify(&hole, &state.community_cards);
    let wager = decide(class, state, me);

    Ok(Decision { hole, class, wager })
}

/// 根据手牌分类和牌桌数值计算下注额，结果总在 `[0, me.stack]` 之内。
///
/// - 口袋对：跟注 + 最小加注
/// - 与公共牌成对 / 高张不成对：跟注；跟注便宜时再加一点 (不超过最小加注)
/// - 弱牌：跟注便宜就跟，否则弃牌 (0)
pub fn decide(class: HandClass, state: &TableState, me: &PlayerView) -> u32 {
    let to_call = me.call_amount(state.current_buy_in);
    let cheap = to_call <= cheap_call_limit(me.stack);

    let wager = match class {
        HandClass::PocketPair(_) => to_call.saturating_add(state.minimum_raise),
        HandClass::BoardPair(_) | HandClass::PremiumUnpaired => {
            let bump = state.minimum_raise.min(me.stack / 100);
            if cheap && bump > 0 {
                to_call.saturating_add(bump)
            } else {
                to_call
            }
        }
        HandClass::Weak => {
            if cheap {
                to_call
            } else {
                0
            }
        }
    };

    // 无论哪个分支，都不能超过自己的筹码
    wager.min(me.stack)
}

// --- 单元测试 ---
