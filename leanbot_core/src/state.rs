use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

pub type PlayerId = usize;

/// 每次请求传入的完整牌桌快照。
/// 请求之间不保留任何状态，每个快照都是自给自足的。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    #[serde(default)]
    pub tournament_id: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub bet_index: u32,
    pub small_blind: NonZeroU32, // 必须为正，0 在解码时被拒绝
    pub current_buy_in: u32,     // 留在本局需要投入的总额
    pub minimum_raise: u32,      // 加注时在 current_buy_in 之上的最小增量
    pub pot: u32,
    #[serde(default)]
    pub dealer: PlayerId,
    #[serde(default)]
    pub orbits: u32,
    pub in_action: PlayerId, // 当前需要决策的玩家
    pub players: Vec<PlayerView>,
    // 翻牌前 0 张，翻牌 3 张，转牌 4 张，河牌 5 张
    #[serde(default)]
    pub community_cards: Vec<Card>,
}

/// 快照中单个玩家可见的状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub status: PlayerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub stack: u32, // 剩余筹码
    pub bet: u32,   // 本轮已投入的筹码
    // 只有正在行动的玩家才能看到自己的底牌
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hole_cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Folded,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Street::PreFlop => "翻牌前",
            Street::Flop => "翻牌",
            Street::Turn => "转牌",
            Street::River => "河牌",
        })
    }
}

// --- TableState 的实现方法 ---

impl TableState {
    /// 按 id 查找当前行动的玩家 (如果存在)
    pub fn acting_player(&self) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == self.in_action)
    }

    /// 根据公共牌数量推断当前街道，张数不合法时返回 None
    pub fn street(&self) -> Option<Street> {
        match self.community_cards.len() {
            0 => Some(Street::PreFlop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

impl PlayerView {
    /// 需要补齐到 current_buy_in 的筹码数
    pub fn call_amount(&self, current_buy_in: u32) -> u32 {
        current_buy_in.saturating_sub(self.bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const SAMPLE: &str = r#"{
        "tournament_id": "550d1d68cd7bd10003000003",
        "game_id": "550da1cb2d909006e90004b1",
        "round": 0,
        "bet_index": 0,
        "small_blind": 10,
        "current_buy_in": 320,
        "pot": 400,
        "minimum_raise": 240,
        "dealer": 1,
        "orbits": 7,
        "in_action": 1,
        "players": [
            {"id": 0, "name": "Albert", "status": "active", "version": "Default random player", "stack": 1010, "bet": 320},
            {"id": 1, "name": "Bob", "status": "active", "version": "Default random player", "stack": 1590, "bet": 80,
             "hole_cards": [{"rank": "6", "suit": "hearts"}, {"rank": "K", "suit": "spades"}]},
            {"id": 2, "name": "Chuck", "status": "out", "version": "Default random player", "stack": 0, "bet": 0}
        ],
        "community_cards": [
            {"rank": "4", "suit": "spades"},
            {"rank": "A", "suit": "hearts"},
            {"rank": "6", "suit": "clubs"}
        ]
    }"#;

    #[test]
    fn test_parse_full_snapshot() {
        let state: TableState = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(state.game_id, "550da1cb2d909006e90004b1");
        assert_eq!(state.small_blind.get(), 10);
        assert_eq!(state.players.len(), 3);
        assert_eq!(state.players[2].status, PlayerStatus::Out);
        assert_eq!(state.community_cards[1], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(state.street(), Some(Street::Flop));
    }

    #[test]
    fn test_acting_player_found_by_id() {
        let state: TableState = serde_json::from_str(SAMPLE).unwrap();
        let me = state.acting_player().unwrap();
        assert_eq!(me.name, "Bob");
        assert_eq!(me.hole_cards.len(), 2);
        assert_eq!(me.call_amount(state.current_buy_in), 240);
    }

    #[test]
    fn test_acting_player_missing() {
        let mut state: TableState = serde_json::from_str(SAMPLE).unwrap();
        state.in_action = 7;
        assert!(state.acting_player().is_none());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "small_blind": 5, "current_buy_in": 10, "minimum_raise": 10, "pot": 15, "in_action": 0,
            "players": [{"id": 0, "name": "Solo", "status": "active", "stack": 100, "bet": 0}]
        }"#;
        let state: TableState = serde_json::from_str(json).unwrap();
        assert!(state.community_cards.is_empty());
        assert!(state.players[0].hole_cards.is_empty());
        assert_eq!(state.players[0].version, None);
        assert_eq!(state.street(), Some(Street::PreFlop));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // 没有 players
        let json = r#"{"small_blind": 5, "current_buy_in": 10, "minimum_raise": 10, "pot": 15, "in_action": 0}"#;
        assert!(serde_json::from_str::<TableState>(json).is_err());
    }

    #[test]
    fn test_zero_small_blind_is_rejected() {
        let json = r#"{
            "small_blind": 0, "current_buy_in": 10, "minimum_raise": 10, "pot": 15, "in_action": 0,
            "players": [{"id": 0, "name": "Solo", "status": "active", "stack": 100, "bet": 0}]
        }"#;
        assert!(serde_json::from_str::<TableState>(json).is_err());
    }

    #[test]
    fn test_street_display() {
        assert_eq!(Street::PreFlop.to_string(), "翻牌前");
        assert_eq!(Street::River.to_string(), "河牌");
    }

    #[test]
    fn test_negative_chips_are_rejected() {
        let json = r#"{
            "small_blind": 5, "current_buy_in": 10, "minimum_raise": 10, "pot": 15, "in_action": 0,
            "players": [{"id": 0, "name": "Solo", "status": "active", "stack": -3, "bet": 0}]
        }"#;
        assert!(serde_json::from_str::<TableState>(json).is_err());
    }

    #[test]
    fn test_call_amount_never_negative() {
        let player = PlayerView {
            id: 0,
            name: "Ann".to_string(),
            status: PlayerStatus::Active,
            version: None,
            stack: 100,
            bet: 50,
            hole_cards: vec![],
        };
        assert_eq!(player.call_amount(20), 0);
        assert_eq!(player.call_amount(80), 30);
    }

    #[test]
    fn test_odd_board_size_has_no_street() {
        let mut state: TableState = serde_json::from_str(SAMPLE).unwrap();
        state.community_cards.truncate(2);
        assert_eq!(state.street(), None);
    }
}
