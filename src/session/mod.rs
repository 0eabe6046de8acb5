pub(crate) mod registry;
pub(crate) mod render_session;
