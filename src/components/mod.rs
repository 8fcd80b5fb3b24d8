//! UI Components

mod add_fish_fry_modal;
mod feedback_modal;
mod fish_fry_card;
mod nav_bar;

pub use add_fish_fry_modal::AddFishFryModal;
pub use feedback_modal::FeedbackModal;
pub use fish_fry_card::FishFryCard;
pub use nav_bar::NavBar;
