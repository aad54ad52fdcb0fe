//! UI Components
//!
//! Each component turns key events into Actions and draws itself. The
//! carousel owns its cursor; the show card and search bar are stateless and
//! report intents through callbacks.

pub mod carousel;
pub mod detail;
pub mod favourites;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod search_bar;
pub mod show_card;

pub use detail::{draw_detail_screen, DetailComponent};
pub use favourites::{draw_favourites_screen, FavouritesComponent};
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use show_card::{ShowCard, ShowCardProps};

#[cfg(test)]
pub(crate) mod test_utils {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Draw into an off-screen terminal and return the resulting buffer
    pub fn render<F: FnOnce(&mut Frame)>(width: u16, height: u16, draw: F) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as text, one line per row
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
