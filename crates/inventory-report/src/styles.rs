use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern};

/// Header fill colour (Office "blue, accent 1").
pub const HEADER_FILL: u32 = 0x4F81BD;

/// Number format applied to date cells.
pub const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

/// Cell formats shared by both sheets.
#[derive(Debug, Clone)]
pub struct ReportStyles {
    /// Bold white text on a solid blue fill, centred both ways.
    pub header: Format,
    pub date: Format,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_pattern(FormatPattern::Solid)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            date: Format::new().set_num_format(DATE_NUM_FORMAT),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_header() -> Format {
        Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x4F81BD))
            .set_pattern(FormatPattern::Solid)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
    }

    #[test]
    fn test_header_style() {
        assert_eq!(ReportStyles::default().header, expected_header());
    }

    #[test]
    fn test_header_style_differs_without_fill_or_font() {
        let header = ReportStyles::default().header;
        let unfilled = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        let dark_text = expected_header().set_font_color(Color::Black);

        assert_ne!(header, unfilled);
        assert_ne!(header, dark_text);
        assert_ne!(header, Format::new());
    }

    #[test]
    fn test_date_style() {
        let styles = ReportStyles::default();
        assert_eq!(styles.date, Format::new().set_num_format("yyyy-mm-dd"));
        assert_ne!(styles.date, Format::new());
    }
}
