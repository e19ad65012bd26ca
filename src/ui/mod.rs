pub use biotope_tui::{draw_field, reset_terminal, CellStyle, StatusLine, Tui};
