pub mod note;
pub mod output;
pub mod render;
pub mod score;
pub mod synth;
pub mod wave;
