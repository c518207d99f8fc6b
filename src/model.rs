//! Catalog of backend model checkpoints and the UI rules attached to each.

use serde::Serialize;

/// Named checkpoint of the backing generation model.
///
/// Serializes to the wire identifier the backend expects (`"base"`,
/// `"cp100"`, `"cp200"`, `"final"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    /// Untrained base model.
    Base,
    /// Checkpoint after 100 training steps.
    Cp100,
    /// Checkpoint after 200 training steps.
    Cp200,
    /// Fully trained model; the only version with editable parameters.
    #[default]
    Final,
}

/// Step ceiling, edit lock, and status line for one model version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelVersionConfig {
    /// Value forced into the step field while this version is active.
    pub max_steps: u32,
    /// Training-parameter fields are locked while set.
    pub read_only: bool,
    /// Status line shown in the model panel.
    pub status_message: &'static str,
}

impl ModelVersion {
    /// All versions in training order, as presented in the selector.
    pub const ALL: [ModelVersion; 4] = [
        ModelVersion::Base,
        ModelVersion::Cp100,
        ModelVersion::Cp200,
        ModelVersion::Final,
    ];

    /// Identifier used in request bodies.
    pub fn wire_id(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Cp100 => "cp100",
            Self::Cp200 => "cp200",
            Self::Final => "final",
        }
    }

    /// Label shown next to the selector radio button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "순정 모델",
            Self::Cp100 => "체크포인트 100",
            Self::Cp200 => "체크포인트 200",
            Self::Final => "최종 모델",
        }
    }

    /// Immutable per-version configuration.
    pub fn config(self) -> ModelVersionConfig {
        match self {
            Self::Base => ModelVersionConfig {
                max_steps: 0,
                read_only: true,
                status_message: "미학습 모델: Llama-3 순정 상태입니다.",
            },
            Self::Cp100 => ModelVersionConfig {
                max_steps: 100,
                read_only: true,
                status_message: "초기 학습: 말투가 조금씩 변하기 시작합니다.",
            },
            Self::Cp200 => ModelVersionConfig {
                max_steps: 200,
                read_only: true,
                status_message: "중간 학습: 지시 이행 능력이 향상되었습니다.",
            },
            Self::Final => ModelVersionConfig {
                max_steps: 300,
                read_only: false,
                status_message: "최종 모델: 300스텝 학습이 완료된 최적화 상태입니다.",
            },
        }
    }
}
