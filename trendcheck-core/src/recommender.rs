//! Action recommender.
//!
//! Rules are checked in order and the first match wins:
//! 1. `score % action_mod == keywords.len()` gives [`Action::BuyMoreStock`]
//! 2. `score > panic_reorder_threshold` gives [`Action::PanicReorder`]
//! 3. otherwise [`Action::WaitAndSee`]

use crate::models::Action;
use crate::PipelineConfig;

pub fn recommend(keywords: &[String], score: u64, config: &PipelineConfig) -> Action {
    if score % config.action_mod() == keywords.len() as u64 {
        Action::BuyMoreStock
    } else if score > config.panic_reorder_threshold() {
        Action::PanicReorder
    } else {
        Action::WaitAndSee
    }
}
