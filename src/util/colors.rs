use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ff6b35);
pub const SUCCESS: Color = Color::from_u32(0x0028a745);
pub const IDLE: Color = Color::from_u32(0x009ca3af);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub grid: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::from_u32(0x00f3f4f6),
    surface: Color::from_u32(0x00ffffff),
    text: Color::from_u32(0x001f2937),
    muted: Color::from_u32(0x004b5563),
    grid: Color::from_u32(0x00d1d5db),
};

pub const DARK: Palette = Palette {
    background: Color::from_u32(0x00111827),
    surface: Color::from_u32(0x001f2937),
    text: Color::from_u32(0x00ffffff),
    muted: Color::from_u32(0x009ca3af),
    grid: Color::from_u32(0x00374151),
};

pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode { DARK } else { LIGHT }
}

pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Color::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_series_colors() {
        assert_eq!(parse_hex("#0ea5e9"), Some(Color::Rgb(0x0e, 0xa5, 0xe9)));
        assert_eq!(parse_hex("#FF6B35"), Some(Color::Rgb(0xff, 0x6b, 0x35)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_hex("0ea5e9"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }
}
