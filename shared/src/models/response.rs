use serde::{Deserialize, Serialize};

use super::now_str;

/// Messages carried in response envelopes. Clients match on these verbatim.
pub mod messages {
    pub const USER_NOT_FOUND: &str = "Usuario no encontrado";
    pub const REQUIRED_FIELDS: &str = "Nombre y email son requeridos";
    pub const USER_CREATED: &str = "Usuario creado exitosamente";
    pub const USER_UPDATED: &str = "Usuario actualizado exitosamente";
    pub const USER_DELETED: &str = "Usuario eliminado exitosamente";
    pub const API_HEALTHY: &str = "API funcionando correctamente";
    pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
}

/// Uniform envelope around every API response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            success: true,
            message: messages::API_HEALTHY.to_string(),
            timestamp: now_str(),
        }
    }
}
