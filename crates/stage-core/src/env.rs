/// Environment preferences read once at startup.
///
/// Neither flag is re-read later; a change of preference after load has no
/// effect until the page is reloaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
}

impl Environment {
    /// Decorative animation only runs when the user has not asked for reduced motion.
    pub fn animations_enabled(&self) -> bool {
        !self.reduced_motion
    }
}
