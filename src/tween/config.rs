/// Configuration surface consumed by the tweening core.
///
/// Durations and trigger identifiers are opaque wire-format strings; the core
/// only threads them into descriptors. Trigger identifiers key synchronized
/// animation groups across the whole merged document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenConfig {
    /// Main transition duration.
    pub duration: String,
    /// Fade-in duration.
    pub fadein_duration: String,
    /// Fade-out duration.
    pub fadeout_duration: String,
    /// Delay fade-ins until the main transition has ended.
    pub fadein_late: bool,
    /// Run fade-outs to completion before the main transition starts.
    pub fadeout_early: bool,
    /// Best-effort positional matching for children lacking an identity
    /// attribute, and for the children of matched group containers.
    pub group_matching: bool,
    /// Base identifier keying the main transition timer.
    pub transition_trigger: String,
    /// Base identifier keying the fade-in timer.
    pub fadein_trigger: String,
    /// Base identifier keying the fade-out timer.
    pub fadeout_trigger: String,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: "5s".to_string(),
            fadein_duration: "1s".to_string(),
            fadeout_duration: "1s".to_string(),
            fadein_late: false,
            fadeout_early: false,
            group_matching: false,
            transition_trigger: "tween_transition".to_string(),
            fadein_trigger: "tween_fadein".to_string(),
            fadeout_trigger: "tween_fadeout".to_string(),
        }
    }
}

impl TweenConfig {
    pub(crate) fn transition_begin(&self) -> String {
        format!("{}.begin", self.transition_trigger)
    }

    pub(crate) fn fadein_begin(&self) -> String {
        format!("{}.begin", self.fadein_trigger)
    }

    pub(crate) fn fadeout_begin(&self) -> String {
        format!("{}.begin", self.fadeout_trigger)
    }
}
