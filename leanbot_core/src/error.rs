use crate::state::PlayerId;
use thiserror::Error;

/// 决策失败。输入不完整时直接报错，不去猜一个下注额。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no player with id {in_action} is in action")]
    ActingPlayerMissing { in_action: PlayerId },

    #[error("player {player} has {found} hole cards, expected 2")]
    HoleCards { player: PlayerId, found: usize },
}
