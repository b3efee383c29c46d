mod heuristic_engine;
mod woothee_engine;

use crate::conf::types::BotFilterKind;
use crate::user_agent::bot::heuristic_engine::HeuristicEngine;
use crate::user_agent::bot::woothee_engine::WootheeEngine;

/// Builds the detector for `kind`, or `None` when filtering is off.
pub fn build_bot_detector(kind: BotFilterKind) -> Option<BotDetector> {
    match kind {
        BotFilterKind::Off => None,
        BotFilterKind::Heuristic => Some(BotDetector::Heuristic(HeuristicEngine)),
        BotFilterKind::Woothee => Some(BotDetector::Woothee(WootheeEngine::new())),
    }
}

pub enum BotDetector {
    Heuristic(HeuristicEngine),
    Woothee(WootheeEngine),
}

impl BotDetector {
    pub fn is_bot(&self, ua: &str) -> bool {
        match self {
            BotDetector::Heuristic(d) => d.is_bot(ua),
            BotDetector::Woothee(d) => d.is_bot(ua),
        }
    }

    pub fn kind(&self) -> BotFilterKind {
        match self {
            BotDetector::Heuristic(_) => BotFilterKind::Heuristic,
            BotDetector::Woothee(_) => BotFilterKind::Woothee,
        }
    }
}
