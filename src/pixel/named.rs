use crate::foundation::core::ColorRecord;

/// Named opaque colors, plus `transparent`. Lookup ignores case.
pub const NAMED_COLORS: &[(&str, ColorRecord)] = &[
    ("transparent", ColorRecord::rgba(0, 0, 0, 0)),
    ("black", ColorRecord::rgba(0, 0, 0, 255)),
    ("grey", ColorRecord::rgba(190, 190, 190, 255)),
    ("dim_grey", ColorRecord::rgba(105, 105, 105, 255)),
    ("light_grey", ColorRecord::rgba(211, 211, 211, 255)),
    ("slate_grey", ColorRecord::rgba(112, 128, 144, 255)),
    ("silver", ColorRecord::rgba(230, 232, 250, 255)),
    ("alice_blue", ColorRecord::rgba(240, 248, 255, 255)),
    ("blue_violet", ColorRecord::rgba(138, 43, 226, 255)),
    ("cadet_blue", ColorRecord::rgba(95, 158, 160, 255)),
    ("dark_slate_blue", ColorRecord::rgba(72, 61, 139, 255)),
    ("dark_turquoise", ColorRecord::rgba(0, 206, 209, 255)),
    ("deep_sky_blue", ColorRecord::rgba(0, 191, 255, 255)),
    ("dodger_blue", ColorRecord::rgba(30, 144, 255, 255)),
    ("light_blue", ColorRecord::rgba(173, 216, 230, 255)),
    ("light_cyan", ColorRecord::rgba(224, 255, 255, 255)),
    ("medium_blue", ColorRecord::rgba(123, 104, 238, 255)),
    ("navy_blue", ColorRecord::rgba(0, 0, 128, 255)),
    ("royal_blue", ColorRecord::rgba(65, 105, 225, 255)),
    ("sky_blue", ColorRecord::rgba(135, 206, 235, 255)),
    ("slate_blue", ColorRecord::rgba(106, 90, 205, 255)),
    ("steel_blue", ColorRecord::rgba(70, 130, 180, 255)),
    ("aquamarine", ColorRecord::rgba(127, 255, 212, 255)),
    ("azure", ColorRecord::rgba(240, 255, 255, 255)),
    ("blue", ColorRecord::rgba(0, 0, 255, 255)),
    ("cyan", ColorRecord::rgba(0, 255, 255, 255)),
    ("turquoise", ColorRecord::rgba(64, 224, 208, 255)),
    ("midnight_blue", ColorRecord::rgba(25, 25, 112, 255)),
    ("brown", ColorRecord::rgba(165, 42, 42, 255)),
    ("rosy_brown", ColorRecord::rgba(188, 143, 143, 255)),
    ("saddle_brown", ColorRecord::rgba(139, 69, 19, 255)),
    ("beige", ColorRecord::rgba(245, 245, 220, 255)),
    ("burlywood", ColorRecord::rgba(222, 184, 135, 255)),
    ("chocolate", ColorRecord::rgba(210, 105, 30, 255)),
    ("peru", ColorRecord::rgba(205, 133, 63, 255)),
    ("tan", ColorRecord::rgba(210, 180, 140, 255)),
    ("copper", ColorRecord::rgba(184, 115, 51, 255)),
    ("dark_green", ColorRecord::rgba(0, 100, 0, 255)),
    ("dark_olive_green", ColorRecord::rgba(85, 107, 47, 255)),
    ("forest_green", ColorRecord::rgba(34, 139, 34, 255)),
    ("green_yellow", ColorRecord::rgba(173, 255, 47, 255)),
    ("lawn_green", ColorRecord::rgba(124, 252, 0, 255)),
    ("lime_green", ColorRecord::rgba(50, 205, 50, 255)),
    ("mint_cream", ColorRecord::rgba(245, 255, 250, 255)),
    ("olive_drab", ColorRecord::rgba(107, 142, 35, 255)),
    ("pale_green", ColorRecord::rgba(152, 251, 152, 255)),
    ("sea_green", ColorRecord::rgba(46, 139, 87, 255)),
    ("spring_green", ColorRecord::rgba(0, 255, 127, 255)),
    ("yellow_green", ColorRecord::rgba(154, 205, 50, 255)),
    ("chartreuse", ColorRecord::rgba(127, 255, 0, 255)),
    ("green", ColorRecord::rgba(0, 255, 0, 255)),
    ("khaki", ColorRecord::rgba(240, 230, 140, 255)),
    ("dark_orange", ColorRecord::rgba(255, 140, 0, 255)),
    ("dark_salmon", ColorRecord::rgba(233, 150, 122, 255)),
    ("light_coral", ColorRecord::rgba(240, 128, 128, 255)),
    ("light_salmon", ColorRecord::rgba(255, 160, 122, 255)),
    ("peach_puff", ColorRecord::rgba(255, 218, 185, 255)),
    ("bisque", ColorRecord::rgba(255, 228, 196, 255)),
    ("coral", ColorRecord::rgba(255, 127, 80, 255)),
    ("honeydew", ColorRecord::rgba(240, 255, 240, 255)),
    ("orange", ColorRecord::rgba(255, 165, 0, 255)),
    ("salmon", ColorRecord::rgba(250, 128, 114, 255)),
    ("sienna", ColorRecord::rgba(160, 82, 45, 255)),
    ("deep_pink", ColorRecord::rgba(255, 20, 147, 255)),
    ("hot_pink", ColorRecord::rgba(255, 105, 180, 255)),
    ("indian_red", ColorRecord::rgba(205, 92, 92, 255)),
    ("light_pink", ColorRecord::rgba(255, 182, 193, 255)),
    ("medium_violet_red", ColorRecord::rgba(199, 21, 133, 255)),
    ("misty_rose", ColorRecord::rgba(255, 228, 225, 255)),
    ("orange_red", ColorRecord::rgba(255, 69, 0, 255)),
    ("violet_red", ColorRecord::rgba(208, 32, 144, 255)),
    ("firebrick", ColorRecord::rgba(178, 34, 34, 255)),
    ("pink", ColorRecord::rgba(255, 192, 203, 255)),
    ("red", ColorRecord::rgba(255, 0, 0, 255)),
    ("tomato", ColorRecord::rgba(255, 99, 71, 255)),
    ("dark_orchid", ColorRecord::rgba(153, 50, 204, 255)),
    ("dark_violet", ColorRecord::rgba(148, 0, 211, 255)),
    ("lavender_blush", ColorRecord::rgba(255, 240, 245, 255)),
    ("medium_orchid", ColorRecord::rgba(186, 85, 211, 255)),
    ("medium_purple", ColorRecord::rgba(147, 112, 219, 255)),
    ("lavender", ColorRecord::rgba(230, 230, 250, 255)),
    ("magenta", ColorRecord::rgba(255, 0, 255, 255)),
    ("maroon", ColorRecord::rgba(176, 48, 96, 255)),
    ("orchid", ColorRecord::rgba(218, 112, 214, 255)),
    ("plum", ColorRecord::rgba(221, 160, 221, 255)),
    ("purple", ColorRecord::rgba(160, 32, 240, 255)),
    ("thistle", ColorRecord::rgba(216, 191, 216, 255)),
    ("violet", ColorRecord::rgba(238, 130, 238, 255)),
    ("antique_white", ColorRecord::rgba(250, 235, 215, 255)),
    ("floral_white", ColorRecord::rgba(255, 250, 240, 255)),
    ("ghost_white", ColorRecord::rgba(248, 248, 255, 255)),
    ("navajo_white", ColorRecord::rgba(255, 222, 173, 255)),
    ("old_lace", ColorRecord::rgba(253, 245, 230, 255)),
    ("white_smoke", ColorRecord::rgba(245, 245, 245, 255)),
    ("gainsboro", ColorRecord::rgba(220, 220, 220, 255)),
    ("ivory", ColorRecord::rgba(255, 255, 240, 255)),
    ("linen", ColorRecord::rgba(250, 240, 230, 255)),
    ("seashell", ColorRecord::rgba(255, 245, 238, 255)),
    ("snow", ColorRecord::rgba(255, 250, 250, 255)),
    ("wheat", ColorRecord::rgba(245, 222, 179, 255)),
    ("white", ColorRecord::rgba(255, 255, 255, 255)),
    ("blanched_almond", ColorRecord::rgba(255, 235, 205, 255)),
    ("dark_goldenrod", ColorRecord::rgba(184, 134, 11, 255)),
    ("lemon_chiffon", ColorRecord::rgba(255, 250, 205, 255)),
    ("light_goldenrod", ColorRecord::rgba(238, 221, 130, 255)),
    ("light_yellow", ColorRecord::rgba(255, 255, 224, 255)),
    ("pale_goldenrod", ColorRecord::rgba(238, 232, 170, 255)),
    ("papaya_whip", ColorRecord::rgba(255, 239, 213, 255)),
    ("cornsilk", ColorRecord::rgba(255, 248, 220, 255)),
    ("gold", ColorRecord::rgba(255, 215, 0, 255)),
    ("goldenrod", ColorRecord::rgba(218, 165, 32, 255)),
    ("moccasin", ColorRecord::rgba(255, 228, 181, 255)),
    ("yellow", ColorRecord::rgba(255, 255, 0, 255)),
];

fn normalize(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
}

/// Look up a named color; `DimGrey`, `dim_grey` and `dim grey` all resolve to the same entry.
pub fn by_name(name: &str) -> Option<ColorRecord> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| normalize(n).eq(normalize(name)))
        .map(|(_, c)| *c)
}
