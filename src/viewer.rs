//! The window: one image stretched over a white background until the user closes it.

use crate::prelude::*;

/// Convert a decoded image into an egui RGBA image.
pub fn to_color_image(img: &DynamicImage) -> ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

pub struct CatboyViewer {
    pending: Option<ColorImage>,
    pub texture: Option<TextureHandle>,
}

impl CatboyViewer {
    pub fn new(image: ColorImage) -> Self {
        Self {
            pending: Some(image),
            texture: None,
        }
    }

    /// Upload the texture on the first frame, then paint it over the whole panel.
    pub fn show(&mut self, ctx: &Context) {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture("catboy", image, egui::TextureOptions::LINEAR));
            info!("{}", Stage::Displaying);
            info!("{}", Stage::WaitingForQuit);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter()
                        .image(texture.id(), ui.max_rect(), uv, Color32::WHITE);
                }
            });
        // No repaint request: eframe sleeps until the next window event.
    }
}

impl eframe::App for CatboyViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Open a fixed-size window of `rect`'s size and block until it is closed.
pub fn run_viewer(image: ColorImage, rect: DisplayRect, title: &str) -> Result<(), AppError> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(rect.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    let app = CatboyViewer::new(image);
    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| AppError::Display(e.to_string()))
}
