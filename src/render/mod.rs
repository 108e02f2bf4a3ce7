pub(crate) mod backend;
pub(crate) mod player;
pub(crate) mod recorder;
