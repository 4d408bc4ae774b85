//! 聖地カードの表示用モデル
//!
//! 文字列はすべてテキストとして描画されるため、ここではエスケープしない。

use crate::category::classify;
use crate::types::SeichiRecord;

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeichiCard {
    pub emoji: &'static str,
    pub category_class: &'static str,
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub access_line: String,
    /// 名シーンの強調行（無ければ要素自体を出さない）
    pub famous_scene_line: Option<String>,
}

impl From<&SeichiRecord> for SeichiCard {
    fn from(record: &SeichiRecord) -> Self {
        let style = classify(&record.category);

        Self {
            emoji: style.emoji,
            category_class: style.class,
            title: record.title.clone(),
            category: record.category.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            access_line: format!("🚃 {}", record.access),
            famous_scene_line: record
                .famous_scene
                .as_ref()
                .map(|scene| format!("💡 {}", scene)),
        }
    }
}

impl SeichiCard {
    /// `category-tag anime-tag` のようなクラス属性値
    pub fn tag_class(&self) -> String {
        format!("category-tag {}", self.category_class)
    }
}
