mod naive;
mod vec2d;

pub use naive::{Film, NaiveRenderer};
pub use vec2d::Vec2D;

use crate::parsing::config::{Config, OutputFormat, RenderSettings};
use crate::world::World;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageResult};
use tracing::info;

pub trait Renderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()>;
}

/// Encodes `film` in the given format. Rows are written top to bottom.
pub fn write_film<W: Write>(film: &Film, format: OutputFormat, writer: W) -> ImageResult<()> {
    let bytes: Vec<u8> = film.buffer.iter().flatten().copied().collect();
    let (width, height) = (film.width as u32, film.height as u32);
    match format {
        OutputFormat::Png => {
            PngEncoder::new(writer).write_image(&bytes, width, height, ExtendedColorType::Rgb8)
        }
        OutputFormat::Ppm => PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8),
        OutputFormat::PpmAscii => PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
            .write_image(&bytes, width, height, ExtendedColorType::Rgb8),
    }
}

/// Writes the film to `<output_directory>/<filename>.<ext>`, creating the
/// directory if needed, and returns the path written.
pub fn output_film(
    render_settings: &RenderSettings,
    output_directory: &str,
    film: &Film,
) -> ImageResult<PathBuf> {
    let filename_str = render_settings
        .filename
        .clone()
        .unwrap_or_else(|| String::from("beauty"));
    fs::create_dir_all(output_directory)?;
    let path = PathBuf::from(output_directory)
        .join(format!("{}.{}", filename_str, render_settings.format.extension()));

    info!("saving image to {}", path.display());
    let mut writer = BufWriter::new(File::create(&path)?);
    write_film(film, render_settings.format, &mut writer)?;
    writer.flush()?;
    Ok(path)
}
