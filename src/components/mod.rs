//! UI Components
//!
//! One component per screen plus a few shared pieces.

mod delete_confirm_button;
mod shelf;
mod pantry_screen;
mod scanner_screen;
mod notification_screen;
mod chat_screen;
mod account_screen;
mod preferences_screen;
mod profile_edit_screen;

pub use delete_confirm_button::DeleteConfirmButton;
pub use shelf::Shelf;
pub use pantry_screen::PantryScreen;
pub use scanner_screen::ScannerScreen;
pub use notification_screen::NotificationScreen;
pub use chat_screen::ChatScreen;
pub use account_screen::AccountScreen;
pub use preferences_screen::PreferencesScreen;
pub use profile_edit_screen::ProfileEditScreen;
