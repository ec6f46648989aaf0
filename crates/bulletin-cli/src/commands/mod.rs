mod config;
mod misc;
mod posts;

pub use config::{handle_config_init, handle_config_show};
pub use misc::handle_completions;
pub use posts::{
    handle_delete, handle_edit, handle_list, handle_new, handle_pin, handle_show,
};
