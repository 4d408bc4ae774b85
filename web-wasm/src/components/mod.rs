//! UIコンポーネント

pub mod header;
pub mod search_tabs;
pub mod search_form;
pub mod loading_indicator;
pub mod error_panel;
pub mod result_section;
pub mod seichi_grid;
