mod loading;

pub use loading::{use_loading_sequence, LoadingHandle};
