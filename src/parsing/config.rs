use crate::materials::DEFAULT_SHININESS;
use crate::math::Vec3;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Png,
    /// binary P6
    Ppm,
    /// plain text P3
    PpmAscii,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Ppm | OutputFormat::PpmAscii => "ppm",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub format: Option<OutputFormat>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub shininess: Option<f32>,
    pub background: Option<[f32; 3]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub format: OutputFormat,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub shininess: f32,
    pub background: Vec3,
}

impl RenderSettings {
    pub fn new(width: usize, height: usize) -> Self {
        RenderSettings {
            filename: None,
            format: OutputFormat::default(),
            resolution: Resolution { width, height },
            threads: None,
            shininess: DEFAULT_SHININESS,
            background: Vec3::ZERO,
        }
    }
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            format: data.format.unwrap_or_default(),
            resolution: data.resolution,
            threads: data.threads,
            shininess: data.shininess.unwrap_or(DEFAULT_SHININESS),
            background: data.background.map(Vec3::from).unwrap_or(Vec3::ZERO),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub output_directory: Option<String>,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub output_directory: String,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            output_directory: data
                .output_directory
                .unwrap_or_else(|| String::from("output")),
            render_settings: data
                .render_settings
                .into_iter()
                .map(RenderSettings::from)
                .collect(),
        }
    }
}
