/// Reasons a step is rejected. A rejected step leaves the episode untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("step called before reset")]
    NotReset,
    #[error("episode already terminated, call reset")]
    EpisodeDone,
    #[error("action {0} is in the action space but has no defined behaviour")]
    Undefined(usize),
    #[error("action {0} is outside the action space of {}", crate::ACTION_SPACE)]
    OutOfRange(usize),
}
