pub mod fs;
pub mod roster_reader;
pub mod roster_writer;
pub mod settings_reader;
pub mod settings_writer;
