//! Decorative motion: floating hero shapes, the particle field and the cursor follower.

pub const PARTICLES_MIN_VIEWPORT: f64 = 768.0;
pub const CURSOR_MIN_VIEWPORT: f64 = 1024.0;
pub const CURSOR_SIZE_PX: f64 = 20.0;
pub const CURSOR_HOVER_SELECTOR: &str = "a, button, .btn";

pub const PARTICLE_KEYFRAMES: &str = "@keyframes float-particle {
    0% { transform: translateY(100vh) rotate(0deg); opacity: 0; }
    50% { opacity: 1; }
    100% { transform: translateY(-100vh) rotate(360deg); opacity: 0; }
}";

pub const PARTICLE_CONTAINER_STYLE: &str = "position: absolute; top: 0; left: 0; width: 100%; \
height: 100%; overflow: hidden; z-index: 0; pointer-events: none;";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingMotion {
    amplitude: f64,
    frequency: f64,
}

impl FloatingMotion {
    /// Later elements swing wider and faster.
    pub fn for_index(index: usize) -> Self {
        let index = index as f64;
        Self {
            amplitude: 20.0 + index * 5.0,
            frequency: 0.01 + index * 0.002,
        }
    }

    pub fn offset(self, elapsed_ms: f64) -> (f64, f64) {
        let y = (elapsed_ms * self.frequency).sin() * self.amplitude;
        let rotation = (elapsed_ms * self.frequency * 0.5).cos() * 5.0;
        (y, rotation)
    }

    pub fn transform(self, elapsed_ms: f64) -> String {
        let (y, rotation) = self.offset(elapsed_ms);
        format!("translateY({y:.2}px) rotate({rotation:.2}deg)")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: 4px; height: 4px; background: rgba(59, 130, 246, 0.3); \
             border-radius: 50%; left: {:.2}%; top: {:.2}%; \
             animation: float-particle {:.2}s linear infinite;",
            self.left_pct, self.top_pct, self.duration_s
        )
    }
}

pub fn particles_enabled(viewport_width: f64) -> bool {
    viewport_width > PARTICLES_MIN_VIEWPORT
}

/// `random` must yield values in `[0, 1)`.
pub fn generate_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            duration_s: 5.0 + random() * 10.0,
        })
        .collect()
}

pub fn cursor_enabled(viewport_width: f64) -> bool {
    viewport_width > CURSOR_MIN_VIEWPORT
}

pub fn cursor_position(client_x: i32, client_y: i32) -> (f64, f64) {
    let half = CURSOR_SIZE_PX / 2.0;
    (f64::from(client_x) - half, f64::from(client_y) - half)
}

pub fn cursor_style(position: (f64, f64), hovering: bool) -> String {
    let scale = if hovering { 2 } else { 1 };
    format!(
        "position: fixed; width: 20px; height: 20px; background: rgba(59, 130, 246, 0.2); \
         border-radius: 50%; pointer-events: none; z-index: 9999; \
         transition: transform 0.1s ease-out; left: {:.0}px; top: {:.0}px; \
         transform: scale({scale});",
        position.0, position.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_motion_starts_at_rest_and_scales_with_index() {
        let first = FloatingMotion::for_index(0);
        assert_eq!(first.offset(0.0), (0.0, 5.0));

        let third = FloatingMotion::for_index(2);
        let quarter_period = std::f64::consts::FRAC_PI_2 / 0.014;
        let (y, _) = third.offset(quarter_period);
        assert!((y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn transform_formats_both_axes() {
        assert_eq!(
            FloatingMotion::for_index(0).transform(0.0),
            "translateY(0.00px) rotate(5.00deg)"
        );
    }

    #[test]
    fn particles_use_injected_randomness() {
        let mut values = [0.0, 0.5, 0.99].into_iter().cycle();
        let particles = generate_particles(2, || values.next().unwrap_or(0.0));

        assert_eq!(particles.len(), 2);
        assert_eq!(
            particles[0],
            Particle {
                left_pct: 0.0,
                top_pct: 50.0,
                duration_s: 5.0 + 0.99 * 10.0,
            }
        );
        assert!(particles[0].style().contains("animation: float-particle 14.90s linear infinite;"));
    }

    #[test]
    fn effects_only_on_wide_viewports() {
        assert!(!particles_enabled(768.0));
        assert!(particles_enabled(769.0));
        assert!(!cursor_enabled(1024.0));
        assert!(cursor_enabled(1280.0));
    }

    #[test]
    fn cursor_centers_on_pointer_and_grows_on_hover() {
        assert_eq!(cursor_position(110, 40), (100.0, 30.0));

        let style = cursor_style((100.0, 30.0), true);
        assert!(style.contains("left: 100px; top: 30px;"));
        assert!(style.contains("transform: scale(2);"));
        assert!(cursor_style((0.0, 0.0), false).contains("transform: scale(1);"));
    }
}
