//! Fixed content shown by the scene: blessing texts and the gold palette.

/// Card texts. Each entry is several short lines joined by commas.
pub const BLESSINGS: &[&str] = &[
    "圣诞快乐,MERRY CHRISTMAS",
    "马上好运气,GOOD LUCK SOON",
    "暴富,GET RICH",
    "人生海海,尽兴开怀",
    "一切尽意,百事从欢",
    "执着于理想,纯粹于当下",
    "所愿即所得,WISH GRANTED",
    "平安喜乐,PEACE AND JOY",
    "发财,被爱,好运常在",
    "来年顶峰相见,SEE YOU AT THE TOP",
    "所愿皆所成,DREAMS COME TRUE",
    "未来可期,一切值得",
    "自由且快乐,FREE AND HAPPY",
];

pub const GOLD_PALETTE_HEX: [&str; 5] = [
    "#FFD700", // gold
    "#D0DDB6", // pale gold / greenish
    "#C4B960", // darker gold
    "#F5E6C4", // champagne
    "#FFFFFF", // white highlight
];

/// Split a blessing into display lines on ASCII or full-width commas.
pub fn blessing_lines(text: &str) -> Vec<&str> {
    text.split(&[',', '，'][..])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse `#RRGGBB` into sRGB floats in \[0, 1\].
pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(digits.get(i..i + 2)?, 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn gold_palette_rgb() -> [[f32; 3]; 5] {
    GOLD_PALETTE_HEX.map(|hex| hex_to_rgb(hex).unwrap_or([1.0, 1.0, 1.0]))
}
