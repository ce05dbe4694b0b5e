//! Pipeline driver: resolve, download, decode, scale, display.

use crate::prelude::*;
use std::fmt;

/// Where the program is in its single pass from start-up to shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    AwaitingUrl,
    Downloading,
    Decoding,
    Displaying,
    WaitingForQuit,
    ShuttingDown,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Init => "Initialising",
            Stage::AwaitingUrl => "Waiting for image URL",
            Stage::Downloading => "Downloading image",
            Stage::Decoding => "Decoding image",
            Stage::Displaying => "Displaying image",
            Stage::WaitingForQuit => "Waiting for window close",
            Stage::ShuttingDown => "Shutting down",
        };
        f.write_str(s)
    }
}

/// An image ready to be put on screen.
pub struct Prepared {
    pub url: String,
    pub image: ColorImage,
    pub rect: DisplayRect,
}

/// Everything before the window opens, against any HTTP backend.
pub fn prepare<C: HttpGet + ?Sized>(client: &C, config: &Config) -> Result<Prepared, AppError> {
    info!("{}", Stage::AwaitingUrl);
    let url = resolve_image_url(client, &config.endpoint, &config.retry_policy())?;
    println!("URL: {}", url);

    info!("{}", Stage::Downloading);
    let data = client.get(&url)?;
    debug!("Downloaded {} bytes", data.len());

    info!("{}", Stage::Decoding);
    let img = decode_image(data.as_bytes())?;
    let rect = DisplayRect::for_image(&img, config);
    let (w, h) = img.dimensions();
    info!(
        "Decoded {}x{} image, window {}x{}",
        w, h, rect.width, rect.height
    );

    Ok(Prepared {
        url,
        image: to_color_image(&fit_to_rect(&img, &rect)),
        rect,
    })
}

/// Run the whole program once. Returns after the window is closed.
pub fn run(config: &Config) -> Result<(), AppError> {
    info!("{}", Stage::Init);
    let client = HttpClient::new(config)?;
    let prepared = prepare(&client, config)?;
    drop(client);

    info!("Showing {}", prepared.url);
    run_viewer(prepared.image, prepared.rect, &config.title)?;
    info!("{}", Stage::ShuttingDown);
    Ok(())
}
