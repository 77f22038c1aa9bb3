pub(crate) mod observe;
pub(crate) mod timers;
