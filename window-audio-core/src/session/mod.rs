pub mod child_audio;
