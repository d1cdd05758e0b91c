/// Frame sequencing, range rendering and sink delivery.
pub mod morph_session;
