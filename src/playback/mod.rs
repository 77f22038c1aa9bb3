pub(crate) mod controller;
pub(crate) mod engine;
pub(crate) mod format;
pub(crate) mod input;
pub(crate) mod reconcile;
pub(crate) mod sim;
pub(crate) mod view;
