pub mod detection_dispatcher;
pub mod display_sink;
pub mod frame_scheduler;
pub mod infrastructure;
pub mod shared_frame_buffer;
