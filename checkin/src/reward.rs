use hoyolab::Game;

/// Shown for any field that was never fetched.
pub(crate) const UNKNOWN: &str = "❓";
const MASK: &str = "■■■■■";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ClaimStatus {
    #[default]
    NotAttempted,
    AlreadyClaimed,
    Success,
    Failed,
}

impl ClaimStatus {
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            ClaimStatus::NotAttempted | ClaimStatus::Failed => "❌",
            ClaimStatus::AlreadyClaimed => "🟡",
            ClaimStatus::Success => "✅",
        }
    }
}

/// Outcome of one credential's check-in for one game.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClaimResult {
    /// Always masked, see [`mask_uid`]
    pub uid: String,
    pub level: String,
    pub name: String,
    pub server: String,
    pub status: ClaimStatus,
    pub day: String,
    pub reward: String,
    pub succeeded: bool,
}

impl Default for ClaimResult {
    fn default() -> Self {
        Self {
            uid: UNKNOWN.into(),
            level: UNKNOWN.into(),
            name: UNKNOWN.into(),
            server: UNKNOWN.into(),
            status: ClaimStatus::NotAttempted,
            day: UNKNOWN.into(),
            reward: UNKNOWN.into(),
            succeeded: false,
        }
    }
}

impl ClaimResult {
    pub(crate) fn failed() -> Self {
        Self {
            status: ClaimStatus::Failed,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GameResultSet {
    pub game: Game,
    pub rewards: Vec<ClaimResult>,
}

pub(crate) fn any_success(results: &[ClaimResult]) -> bool {
    results.iter().any(|r| r.succeeded)
}

/// Keeps everything but the last six characters, then five blocks and the
/// final character: `123456789` becomes `123■■■■■9`.
pub(crate) fn mask_uid(uid: &str) -> String {
    let chars: Vec<char> = uid.chars().collect();
    let prefix: String = chars[..chars.len().saturating_sub(6)].iter().collect();
    let last = chars.last().map(char::to_string).unwrap_or_default();
    format!("{prefix}{MASK}{last}")
}
