pub mod draw;
pub mod enums;
pub mod player;
pub mod settings;
pub mod team;
