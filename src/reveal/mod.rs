pub(crate) mod sequencer;
pub(crate) mod stage;
