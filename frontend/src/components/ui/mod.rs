pub mod button;
pub mod card;
pub mod grid;
pub mod spinner;
pub mod status_badge;
pub mod table;
pub mod toast;
