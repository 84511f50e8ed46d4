pub mod components;
pub mod draw_result_screen;
pub mod draw_setup_screen;
pub mod edit_player_screen;
pub mod roster_screen;
pub mod screen;
