use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 255 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ADDRESS: Color = Color::TrueColor { r: 150, g: 150, b: 150 };

pub const STATUS_UP: Color = Color::BrightGreen;
pub const STATUS_DOWN: Color = Color::BrightRed;
