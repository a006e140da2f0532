//! Assist capability
//!
//! The research/checklist AI features are modeled as a capability trait
//! with a single shipped implementation that is permanently disabled: it
//! answers every call with one fixed user-facing message. A live
//! implementation can be swapped in behind the trait without touching
//! call sites.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Message shown for every assist call while the feature is off.
pub const DISABLED_MESSAGE: &str = "ฟีเจอร์ผู้ช่วย AI ถูกปิดใช้งานอยู่ในขณะนี้";

/// Suggested checklist entry for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSuggestion {
    pub description: String,
}

#[async_trait]
pub trait Assist: Send + Sync {
    /// Suggest a task checklist for a case title.
    async fn suggest_tasks(&self, case_title: &str) -> ClientResult<Vec<TaskSuggestion>>;

    /// Answer a free-form research question.
    async fn research(&self, question: &str) -> ClientResult<String>;
}

/// The only implementation that ships: always disabled, never retries.
pub struct DisabledAssist;

#[async_trait]
impl Assist for DisabledAssist {
    async fn suggest_tasks(&self, case_title: &str) -> ClientResult<Vec<TaskSuggestion>> {
        tracing::debug!(case_title, "assist call while feature disabled");
        Err(ClientError::FeatureDisabled(DISABLED_MESSAGE.into()))
    }

    async fn research(&self, _question: &str) -> ClientResult<String> {
        Err(ClientError::FeatureDisabled(DISABLED_MESSAGE.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_assist_answers_with_the_fixed_message() {
        let assist = DisabledAssist;

        let err = assist.suggest_tasks("ต่ออายุ VISA - Somchai").await.unwrap_err();
        match err {
            ClientError::FeatureDisabled(message) => assert_eq!(message, DISABLED_MESSAGE),
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            assist.research("ขั้นตอนรายงานตัว 90 วัน").await,
            Err(ClientError::FeatureDisabled(_))
        ));
    }
}
