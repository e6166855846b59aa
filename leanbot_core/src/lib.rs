//! # 扑克机器人核心逻辑库
//!
//! 这个 `core` crate 包含牌桌快照的数据模型、手牌分类以及下注决策。
//! 它不做任何 I/O，也不在调用之间保存状态，HTTP 协议部分由 server crate 负责。

mod card;
mod error;
mod hand;
mod logic;
mod state;
mod strategy;

pub use card::*;

pub use error::DecisionError;

pub use hand::{classify, HandClass};

pub use logic::{bet_request, cheap_call_limit, decide, Decision};

pub use state::*;

pub use strategy::{BasicStrategy, Strategy};
