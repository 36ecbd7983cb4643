pub mod picker;

pub use picker::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, PickerConfig, PickerConfigSource,
};
