pub mod kind_guesser;
pub mod note_detector;
