pub mod app;
pub mod intro_overlay;
pub mod letter;
pub mod music_toggle;
pub mod sparkle;
