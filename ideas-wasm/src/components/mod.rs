pub(crate) mod banner;
pub(crate) mod header;
pub(crate) mod ideas_page;
