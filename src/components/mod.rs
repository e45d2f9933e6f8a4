pub mod app;
pub mod player_card;
pub mod summary_panel;
pub mod winner_view;
