pub mod frame_forwarder;
pub mod sample_rate;
pub mod settings_diff;
