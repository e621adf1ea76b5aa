//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Small English/Vietnamese word list with one malformed line.
pub const SAMPLE_LIST: &str = "dog    con chó\n\
cat    con mèo\n\
hello    xin chào; chào\n\
not a valid line\n\
\n\
bird    con chim\n";

/// Number of valid entries in SAMPLE_LIST.
pub const SAMPLE_WORDS: usize = 4;

/// Generate a word list with `num_words` entries.
pub fn sample_list(num_words: usize) -> String {
    (0..num_words)
        .map(|i| format!("word{}    từ {}", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create an upload request body.
pub fn upload_request(content: &str) -> serde_json::Value {
    json!({ "content": content })
}

/// Create a start session request body.
pub fn start_request(mode: &str) -> serde_json::Value {
    json!({ "mode": mode })
}

/// Create a submit answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Create a mark difficulty request body.
pub fn difficulty_request(difficulty: &str) -> serde_json::Value {
    json!({ "difficulty": difficulty })
}

/// Create a direction setting request body.
pub fn direction_request(direction: &str) -> serde_json::Value {
    json!({ "direction": direction })
}
