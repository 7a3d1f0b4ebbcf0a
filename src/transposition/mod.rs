pub mod semitone_transpose;

pub use semitone_transpose::{transpose_chord, transpose_chord_with, transpose_tab};
