pub(crate) mod annotator;
pub(crate) mod options;
