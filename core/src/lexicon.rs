//! Fixed keyword and pattern tables driving the scoring heuristics.
//!
//! These tables are configuration data, not logic: extending one never
//! touches the scoring algorithm. Entries in HOOK_PATTERNS and
//! CTA_PATTERNS are regex fragments (compiled case-insensitively in
//! text_features); the remaining tables are plain substrings matched
//! against the raw text. The corpus is Hong-Kong social media, so the
//! tables mix Traditional Chinese and English surface forms.

/// Attention-hook patterns: leading digit, question mark, guide/tips
/// words, save prompts, limited-time offers, "personally tested",
/// direct questions to the reader, step-by-step framing.
pub const HOOK_PATTERNS: &[&str] = &[
    r"^\s*\d",
    r"\?|？",
    r"攻略|懶人包|秘訣|教學",
    r"必收藏|收藏|Save|save",
    r"限時|優惠|折扣",
    r"親測|實測",
    r"你會|你有冇|點樣",
    r"一步一步|Step[-\s]?by[-\s]?step",
];

/// Call-to-action patterns: comment / save / share / tag-a-friend cues.
pub const CTA_PATTERNS: &[&str] = &[
    r"留言|Comment|comment",
    r"收藏|Save|save",
    r"分享|Share|share",
    r"Tag|tag|@朋友|@人",
];

/// Thumbnail keywords that raise attractiveness (+0.08 per keyword present).
pub const THUMB_POSITIVE: &[&str] = &[
    "明亮", "特寫", "乾淨背景", "構圖清晰", "人像眼神",
    "食物", "主體居中", "自然光", "高對比", "卡牌近拍",
];

/// Thumbnail keywords that lower attractiveness (-0.10 per keyword present).
pub const THUMB_NEGATIVE: &[&str] = &["模糊", "陰暗", "雜亂", "背光", "低解析度"];

/// Persona interest category → alternate hashtag surface forms.
/// A single matching alternate counts the whole category as covered.
pub const INTEREST_TAG_MAP: &[(&str, &[&str])] = &[
    ("美食", &["香港美食", "hkfood", "foodie", "打卡", "港式早餐", "咖啡店", "cafe", "cafelife", "hkfoodie"]),
    ("旅遊", &["旅遊", "旅行", "travel", "hongkong", "hk"]),
    ("咖啡店探店", &["咖啡店", "cafe", "coffeetime", "latte"]),
    ("投資", &["投資", "投資理財", "stocks", "hkstocks", "bitcoin", "crypto"]),
    ("教育", &["教育", "學習日常", "teacher", "教學", "edtech"]),
    ("科技", &["科技", "ai", "人工智能", "tech"]),
    ("動漫", &["動漫", "anime", "pokemon", "卡牌", "tcg"]),
    ("卡牌", &["pokemon", "卡牌", "tcg", "寶可夢"]),
    ("時尚", &["時尚", "ootd", "穿搭", "fashion", "hkstyle"]),
    ("美妝", &["美妝", "makeup", "skincare"]),
    ("搞笑", &["搞笑", "meme", "funny"]),
    ("親子", &["親子", "親子活動", "kids", "family"]),
];

/// Value-anchor cues with weights. A cue signals perceived monetary or
/// collectible value (grading score, total value, scarcity, guarantees).
/// The summed bonus is capped at VALUE_ANCHOR_CAP.
pub const VALUE_ANCHOR_CUES: &[(&str, f64)] = &[
    ("psa10", 0.08),
    ("總值", 0.06),
    ("$", 0.05),
    ("稀有", 0.06),
    ("限量", 0.05),
    ("保值", 0.05),
    ("保證", 0.04),
    ("抽中", 0.04),
];

pub const VALUE_ANCHOR_CAP: f64 = 0.15;

/// Active-time slots that earn the 1.05 high-traffic modifier:
/// lunch, after 9pm, after school, weekend afternoon.
pub const HIGH_TRAFFIC_SLOTS: &[&str] = &["午餐時段", "晚上9點後", "放學後5點至8點", "週末下午"];
