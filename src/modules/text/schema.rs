use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 1, message = "input_text cannot be empty"))]
    pub input_text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MainPointsRequest {
    #[validate(length(min = 1, message = "input_text cannot be empty"))]
    pub input_text: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "input_text cannot be empty"))]
    pub input_text: String,
    #[validate(length(min = 1, message = "question cannot be empty"))]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct MainPointsResponse {
    pub main_points: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
