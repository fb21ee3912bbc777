pub mod detected_item;
pub mod detector_error;
pub mod face_detector;
pub mod region_detector;
pub mod text_recognizer;
