pub mod config;
pub mod legacy;
pub mod primitives;

use config::TOMLConfig;
use primitives::{LightData, ObjectData};

use crate::world::{Light, SceneError, SceneObject, World};

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

pub use legacy::parse_legacy_scene;

/// Everything that can go wrong between a path on disk and a validated world.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {index} has no type")]
    MissingType { index: usize },
    #[error("entry {index} has unknown type {kind:?}")]
    UnknownObjectType { index: usize, kind: String },
    #[error("entry {index} ({kind}) is malformed")]
    InvalidEntry {
        index: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("can't tell the scene format of {}, expected a .toml or .json file", path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

#[derive(Deserialize, Clone, Debug)]
pub struct SceneData {
    pub objects: Vec<ObjectData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
}

impl TryFrom<SceneData> for World {
    type Error = SceneError;
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        World::new(
            data.objects.into_iter().map(SceneObject::from).collect(),
            data.lights.into_iter().map(Light::from).collect(),
        )
    }
}

fn read_file(filepath: &Path) -> Result<String, LoadError> {
    info!("loading file at {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .map_err(|source| LoadError::Io {
            path: filepath.to_path_buf(),
            source,
        })?;
    info!("done: {} bytes", read_count);
    Ok(input)
}

/// Reads the render configuration, filling in the thread count from the
/// number of cpus where it isn't given.
pub fn get_settings(filepath: impl AsRef<Path>) -> Result<TOMLConfig, LoadError> {
    let input = read_file(filepath.as_ref())?;
    let num_cpus = num_cpus::get();
    let mut settings: TOMLConfig = toml::from_str(&input)?;
    for render_settings in settings.render_settings.iter_mut() {
        render_settings.threads = match render_settings.threads {
            Some(expr) => Some(expr),
            None => Some(num_cpus as u16),
        };
    }
    Ok(settings)
}

pub fn parse_toml_scene(input: &str) -> Result<World, LoadError> {
    let scene: SceneData = toml::from_str(input)?;
    Ok(World::try_from(scene)?)
}

/// Loads and validates a scene, picking the format from the file extension.
pub fn load_scene(filepath: impl AsRef<Path>) -> Result<World, LoadError> {
    let filepath = filepath.as_ref();
    let extension = filepath
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let parse: fn(&str) -> Result<World, LoadError> = match extension.as_deref() {
        Some("toml") => parse_toml_scene,
        Some("json") => parse_legacy_scene,
        _ => {
            return Err(LoadError::UnsupportedExtension {
                path: filepath.to_path_buf(),
            })
        }
    };
    let input = read_file(filepath)?;
    parse(&input).inspect_err(|e| {
        error!("encountered error when parsing scene file: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use config::{Config, OutputFormat};

    #[test]
    fn test_parsing_config() {
        let settings = get_settings("data/config.toml").unwrap();
        assert!(settings
            .render_settings
            .iter()
            .all(|render_settings| render_settings.threads.is_some()));
        let config = Config::from(settings);
        assert_eq!(config.scene_file, "data/scenes/single_sphere.toml");
        assert_eq!(config.render_settings[0].resolution.width, 100);
        assert_eq!(config.render_settings[1].format, OutputFormat::PpmAscii);
    }

    #[test]
    fn test_load_toml_scene() {
        let world = load_scene("data/scenes/single_sphere.toml").unwrap();
        assert_eq!(world.objects().len(), 2);
        assert_eq!(world.lights().len(), 1);
        assert_eq!(world.lights()[0].position, Vec3::new(0.0, 5.0, -5.0));
    }

    #[test]
    fn test_load_json_scene() {
        let world = load_scene("data/scenes/single_sphere.json").unwrap();
        assert_eq!(world.objects().len(), 2);
        assert_eq!(world.objects()[1].kind(), "sphere");
        assert_eq!(world.lights().len(), 1);
    }

    #[test]
    fn test_both_formats_build_the_same_world() {
        let from_toml = load_scene("data/scenes/single_sphere.toml").unwrap();
        let from_json = load_scene("data/scenes/single_sphere.json").unwrap();
        assert_eq!(from_toml.objects(), from_json.objects());
        assert_eq!(from_toml.lights(), from_json.lights());
    }

    #[test]
    fn test_all_bundled_scenes_load() {
        for path in [
            "data/scenes/shadowed_spheres.toml",
            "data/scenes/spot_lights.toml",
            "data/scenes/shadowed_spheres.json",
        ] {
            assert!(load_scene(path).is_ok(), "{}", path);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            load_scene("data/scenes/single_sphere.yaml"),
            Err(LoadError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_scene("data/scenes/does_not_exist.toml"),
            Err(LoadError::Io { .. })
        ));
    }

    #[test]
    fn test_scene_without_camera() {
        let result = parse_toml_scene(
            r#"
            [[objects]]
            type = "Sphere"
            center = [0.0, 0.0, -5.0]
            radius = 1.0
            diffuse_color = [1.0, 0.0, 0.0]
            "#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Scene(SceneError::MissingCamera))
        ));
    }

    #[test]
    fn test_unknown_toml_object_type() {
        let result = parse_toml_scene(
            r#"
            [[objects]]
            type = "Torus"
            radius = 1.0
            "#,
        );
        assert!(matches!(result, Err(LoadError::Toml(_))));
    }
}
