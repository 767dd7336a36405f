use super::{output_film, Renderer, Vec2D};

use crate::integrator::{DirectLightingIntegrator, RenderError, SamplerIntegrator};
use crate::parsing::config::{Config, RenderSettings};
use crate::profile::Profile;
use crate::tonemap::{Clamp, Tonemapper};
use crate::world::World;

use std::sync::Arc;
#[cfg(feature = "pbr")]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "pbr")]
use std::thread;
use std::time::Instant;
#[cfg(feature = "pbr")]
use std::time::Duration;

use anyhow::Context;
#[cfg(feature = "pbr")]
use pbr::ProgressBar;
use rayon::prelude::*;
use tracing::{info, warn};

pub type Film = Vec2D<[u8; 3]>;

#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// Casts one camera ray per pixel and shades it. Pixels are independent and
    /// rendered in parallel, each task writing only its own slot of the film.
    /// The camera comes from the integrator's own world.
    pub fn render_sampled<I: SamplerIntegrator>(
        integrator: &I,
        settings: &RenderSettings,
        tonemapper: &dyn Tonemapper,
    ) -> Result<(Film, Profile), RenderError> {
        let camera = *integrator
            .world()
            .camera()
            .ok_or(RenderError::MissingCamera)?;
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);

        let mut film: Film = Vec2D::new(width, height, [0u8; 3]);

        #[cfg(feature = "pbr")]
        let pixel_count = Arc::new(AtomicUsize::new(0));
        #[cfg(feature = "pbr")]
        let progress_thread = {
            let total_pixels = film.total_pixels();
            let counter = pixel_count.clone();
            let mut pb = ProgressBar::new(total_pixels as u64);
            thread::spawn(move || {
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = counter.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;
                    thread::sleep(Duration::from_millis(250));
                }
            })
        };

        let result = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| -> Result<Profile, RenderError> {
                let mut profile = Profile::default();
                let row: usize = pixel_index / width;
                let col: usize = pixel_index - width * row;

                let camera_ray = camera.get_ray(row, col, width, height);
                let color = integrator.color(camera_ray, &mut profile)?;
                debug_assert!(color.is_finite(), "{:?} resulted in {:?}", camera_ray, color);
                *pixel_ref = tonemapper.map(color);

                #[cfg(feature = "pbr")]
                pixel_count.fetch_add(1, Ordering::Relaxed);
                Ok(profile)
            })
            .try_reduce(Profile::default, |a, b| Ok(a.combine(b)));

        #[cfg(feature = "pbr")]
        {
            if result.is_err() {
                // unblock the progress thread, the render stopped early
                pixel_count.store(film.total_pixels(), Ordering::Relaxed);
            }
            if let Err(panic) = progress_thread.join() {
                warn!("progress bar thread threw an error {:?}", panic);
            }
        }

        Ok((film, result?))
    }

    pub fn render_single(
        world: Arc<World>,
        settings: &RenderSettings,
    ) -> Result<(Film, Profile), RenderError> {
        let integrator = DirectLightingIntegrator::new(world)
            .with_shininess(settings.shininess)
            .with_background(settings.background);
        NaiveRenderer::render_sampled(&integrator, settings, &Clamp::new())
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()> {
        let world = Arc::new(world);
        if config.render_settings.is_empty() {
            warn!("config has no render settings, nothing to do");
        }
        for (render_id, render_settings) in config.render_settings.iter().enumerate() {
            let now = Instant::now();
            let (film, profile) = NaiveRenderer::render_single(Arc::clone(&world), render_settings)
                .with_context(|| format!("render {} failed", render_id))?;
            let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
            info!("render {} took {}s", render_id, elapsed);
            profile.pretty_print(
                elapsed,
                render_settings.threads.unwrap_or(1) as usize,
            );

            let path = output_film(render_settings, &config.output_directory, &film)
                .with_context(|| format!("failed to write output of render {}", render_id))?;
            info!("wrote {}", path.display());
        }
        Ok(())
    }
}
