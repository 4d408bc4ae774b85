//! バックエンドAPI

pub mod seichi;
