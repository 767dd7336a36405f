use tracing::info;

/// Ray counters for one render, accumulated per pixel and merged across threads.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub camera_rays: usize,   // one per pixel
    pub primary_hits: usize,  // camera rays that found a surface
    pub shadow_rays: usize,   // all rays used to test light visibility
    pub occluded_rays: usize, // shadow rays that found an occluder
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        primary_hits: usize,
        shadow_rays: usize,
        occluded_rays: usize,
    ) -> Self {
        Profile {
            camera_rays,
            primary_hits,
            shadow_rays,
            occluded_rays,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.primary_hits + other.primary_hits,
            self.shadow_rays + other.shadow_rays,
            self.occluded_rays + other.occluded_rays,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            primary_hits,
            shadow_rays,
            occluded_rays,
        } = self;
        let elapsed = elapsed.max(f32::EPSILON);
        let threads = threads.max(1) as f32;
        let sum = camera_rays + shadow_rays;
        info!(
            "{} total camera rays at {} per second and {} per second per thread, {} hit a surface",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / threads,
            primary_hits
        );
        info!(
            "{} total shadow rays at {} per second and {} per second per thread, {} were occluded",
            shadow_rays,
            shadow_rays as f32 / elapsed,
            shadow_rays as f32 / elapsed / threads,
            occluded_rays
        );
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / threads
        );
    }
}
