//! CSS keyframes injected at startup and the animation shorthands that use them

pub const KEYFRAMES_CSS: &str = "\
@keyframes fadeOut { to { opacity: 0; filter: blur(10px); transform: scale(0.95); } }
@keyframes fadeIn { from { opacity: 0; filter: blur(10px); } to { opacity: 1; filter: blur(0); } }
@keyframes glowPulse { from { opacity: 1; transform: scale(0); } to { opacity: 0; transform: scale(1); } }
@keyframes popAnimation { 0% { transform: scale(1); opacity: 1; } 100% { transform: scale(0); opacity: 0; } }
";

/// Named keyframe animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyframes {
    FadeOut,
    FadeIn,
    GlowPulse,
}

impl Keyframes {
    pub fn name(&self) -> &'static str {
        match self {
            Keyframes::FadeOut => "fadeOut",
            Keyframes::FadeIn => "fadeIn",
            Keyframes::GlowPulse => "glowPulse",
        }
    }

    /// `animation` shorthand running once and holding the final frame
    pub fn css(&self, duration_ms: u32) -> String {
        let secs = duration_ms as f64 / 1000.0;
        format!("{} {}s ease-out forwards", self.name(), secs)
    }
}

/// Inline style for the radial glow added to the gate button on tap
pub const GATE_GLOW_STYLE: &str = "position: absolute; top: 50%; left: 50%; \
transform: translate(-50%, -50%); width: 100px; height: 100px; \
background: radial-gradient(circle, rgba(255, 20, 147, 0.6) 0%, transparent 70%); \
border-radius: 50%; animation: glowPulse 0.8s ease-out forwards; pointer-events: none;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_shorthand() {
        assert_eq!(Keyframes::FadeOut.css(600), "fadeOut 0.6s ease-out forwards");
        assert_eq!(Keyframes::FadeOut.css(2000), "fadeOut 2s ease-out forwards");
        assert_eq!(Keyframes::FadeIn.css(1000), "fadeIn 1s ease-out forwards");
    }

    #[test]
    fn test_every_keyframe_is_defined() {
        for k in [Keyframes::FadeOut, Keyframes::FadeIn, Keyframes::GlowPulse] {
            assert!(KEYFRAMES_CSS.contains(&format!("@keyframes {} ", k.name())));
        }
    }
}
