// std
pub use std::fs;
pub use std::path::{Path, PathBuf};
pub use std::time::Duration;

// external crates
pub use eframe::egui::{self, Color32, ColorImage, Context, Rect, TextureHandle};
pub use image::{DynamicImage, GenericImageView};
pub use log::{debug, info, warn};

// crate modules
pub use crate::{
    app::Stage,
    config::*,
    error::AppError,
    http::{HttpClient, HttpGet},
    picture::{decode_image, fit_to_rect, DisplayRect},
    resolve::{resolve_image_url, RetryPolicy},
    viewer::{run_viewer, to_color_image},
};
