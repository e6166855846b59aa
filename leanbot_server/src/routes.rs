use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use leanbot_core::{Strategy, TableState};

use crate::error::ServerError;

// 服务器全局状态。策略本身无状态，可以被所有请求共享。
pub struct AppState {
    pub strategy: Arc<dyn Strategy>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(strategy: impl Strategy + 'static) -> Self {
        AppState { strategy: Arc::new(strategy) }
    }
}

/// 表单请求体：`action` 以及可选的 JSON 编码 `game_state`
#[derive(Debug, Default, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub game_state: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Version,
    BetRequest,
    Showdown,
}

impl FromStr for Action {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "version" => Ok(Action::Version),
            "bet_request" => Ok(Action::BetRequest),
            "showdown" => Ok(Action::Showdown),
            other => Err(ServerError::UnknownAction(other.to_string())),
        }
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", post(action_handler))
        .with_state(state)
}

/// 处理根路径上的 POST 请求
async fn action_handler(
    State(state): State<SharedState>,
    form: Result<Form<ActionForm>, FormRejection>,
) -> Result<String, ServerError> {
    let form = match form {
        Ok(Form(form)) => Ok(form),
        // 不是表单的请求体当作没有任何字段，随后报 missing action
        Err(FormRejection::InvalidFormContentType(_)) => Ok(ActionForm::default()),
        Err(rejection) => Err(ServerError::MalformedForm(rejection.body_text())),
    };
    form.and_then(|form| dispatch(&state, form))
        .inspect_err(|e| warn!("请求被拒绝: {}", e))
}

/// 核心消息处理逻辑：解析动作，解码牌桌快照，交给策略
pub fn dispatch(state: &AppState, form: ActionForm) -> Result<String, ServerError> {
    let action = form
        .action
        .as_deref()
        .filter(|a| !a.is_empty())
        .ok_or(ServerError::MissingAction)?
        .parse::<Action>()?;

    match action {
        Action::Version => Ok(state.strategy.version().to_string()),
        Action::BetRequest => {
            let table = decode_game_state(form.game_state.as_deref())?;
            let decision = state.strategy.bet_request(&table)?;
            let street = table
                .street()
                .map_or_else(|| "未知街道".to_string(), |s| s.to_string());
            info!(
                "对局 {} 第 {} 轮 {}: 底牌 {} {}，{}，下注 {}",
                table.game_id,
                table.round,
                street,
                decision.hole[0],
                decision.hole[1],
                decision.class,
                decision.wager
            );
            Ok(decision.wager.to_string())
        }
        Action::Showdown => {
            // 摊牌只需要确认，快照解析失败也不影响响应
            match decode_game_state(form.game_state.as_deref()) {
                Ok(table) => {
                    let stacks: Vec<String> = table
                        .players
                        .iter()
                        .map(|p| format!("{}={}", p.name, p.stack))
                        .collect();
                    info!(
                        "对局 {} 摊牌，奖池 {}，筹码 [{}]",
                        table.game_id,
                        table.pot,
                        stacks.join(", ")
                    );
                    state.strategy.showdown(&table);
                }
                Err(ServerError::MissingGameState) => {}
                Err(e) => warn!("摊牌数据无法解析: {}", e),
            }
            Ok("{}".to_string())
        }
    }
}

/// 把表单中的 JSON 字符串解码为 TableState
fn decode_game_state(raw: Option<&str>) -> Result<TableState, ServerError> {
    let raw = raw.filter(|s| !s.trim().is_empty()).ok_or(ServerError::MissingGameState)?;
    Ok(serde_json::from_str(raw)?)
}
