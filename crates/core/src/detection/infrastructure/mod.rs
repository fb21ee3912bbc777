pub mod cached_face_detector;
pub mod cached_text_recognizer;
