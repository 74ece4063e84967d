//! Response envelopes shared by the character routes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"message": ...}` used for confirmations and every error.
#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody { message: message.into() }
    }
}

/// `{"data": [...]}` returned by reads, whether filtered or not.
#[derive(Serialize, Debug)]
pub struct DataBody<T> {
    pub data: Vec<T>,
}

/// `{"status": 1, "message": ...}` returned by a successful delete.
#[derive(Serialize, Debug)]
pub struct StatusBody {
    pub status: u8,
    pub message: String,
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody::new(message)))
}

pub fn data_ok<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::OK, Json(DataBody { data }))
}

pub fn status_ok(message: &str) -> (StatusCode, Json<StatusBody>) {
    (
        StatusCode::OK,
        Json(StatusBody {
            status: 1,
            message: message.to_string(),
        }),
    )
}
