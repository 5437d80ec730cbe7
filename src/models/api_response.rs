use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope padrão de resposta
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn new(success: bool, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success,
            message: message.into(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, message, None)
    }
}
