use crate::error::DecisionError;
use crate::logic::{self, Decision};
use crate::state::TableState;

/// 下注策略
///
/// 服务器在所有请求之间共享同一个策略实例，所以实现不应在请求之间保存状态。
pub trait Strategy: Send + Sync {
    /// 报告给牌桌的版本字符串
    fn version(&self) -> &str;

    /// 针对一个牌桌快照给出下注额
    fn bet_request(&self, state: &TableState) -> Result<Decision, DecisionError>;

    /// 一局结束后的回调，默认什么也不做
    fn showdown(&self, _state: &TableState) {}
}

/// 基础策略：口袋对最小加注，好牌跟注，弱牌只在便宜时跟注。
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub const VERSION: &'static str = "v0.1 basic strategy";
}

impl Strategy for BasicStrategy {
    fn version(&self) -> &str {
        Self::VERSION
    }

    fn bet_request(&self, state: &TableState) -> Result<Decision, DecisionError> {
        logic::bet_request(state)
    }
}
